use clap::Parser;

use crate::core::DEFAULT_PREFIX;

#[derive(Debug, Parser)]
#[command(
    name = "addr-check",
    about = "Decode a Graphene (BTS) key or address and verify its checksum"
)]
pub struct Opt {
    #[arg(help = "The key or address string to check")]
    pub address: String,

    #[arg(
        long = "prefix",
        default_value = DEFAULT_PREFIX,
        help = "Network prefix expected in front of the base58 data"
    )]
    pub prefix: String,
}
