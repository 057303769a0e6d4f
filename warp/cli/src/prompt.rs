use serde::Serialize;

pub fn print_json_pretty<T>(data: &T) -> anyhow::Result<()>
where
    T: Serialize,
{
    let json = serde_json::to_string_pretty(data)?;

    println!("{json}");

    Ok(())
}
