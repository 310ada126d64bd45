use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use clap::Args;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ServerConfig {
    #[arg(long, env = "PLAN_SIMULATOR_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,
    #[arg(long, env = "PLAN_SIMULATOR_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
    #[command(flatten)]
    pub catalog: CatalogArgs,
}

#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct CatalogArgs {
    #[arg(
        long = "catalog",
        env = "PLAN_SIMULATOR_CATALOG",
        help = "JSON file with includedBenefits and plansIndicators; built-in catalog when omitted"
    )]
    pub path: Option<PathBuf>,
}
