use anyhow::Context;
use folio::domain::config::SiteConfig;
use folio::kernel::config::parse_config;
use folio_logger::Logger;
use folio_web::{App, SITE_CONFIG, WebApp};

fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let cfg: SiteConfig = parse_config(SITE_CONFIG).context("Critical: Site configuration is malformed")?;

    WebApp::new(cfg).launch(App);
    Ok(())
}
