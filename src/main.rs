use anyhow::Result;

fn main() -> Result<()> {
    barnacle::run()?;
    Ok(())
}
