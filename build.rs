use anyhow::Result;
use vergen::EmitBuilder;

// Provides VERGEN_GIT_SHA for the binary's --version output
fn main() -> Result<()> {
    EmitBuilder::builder().git_sha(true).emit()?;
    Ok(())
}
