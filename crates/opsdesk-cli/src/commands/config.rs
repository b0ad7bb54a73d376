use super::context::CliContext;
use anyhow::Result;

pub fn run(context: &CliContext) -> Result<()> {
    let path = context.config_service.config_path()?;
    println!("# {}", path.display());

    let mut shown = context.config();
    if shown.api.auth_token.is_some() {
        shown.api.auth_token = Some("********".to_string());
    }
    print!("{}", toml::to_string_pretty(&shown)?);
    Ok(())
}
