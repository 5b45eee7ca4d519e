// Entry point for the address checker CLI.
use addr_check::{check_address, AddressKind, Opt};
use clap::Parser;
use data_encoding::HEXLOWER;
use log::{error, LevelFilter};
use std::process;

fn main() {
    // Info level keeps normal runs quiet; failures go through error!
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let opt = Opt::parse();

    if let Err(e) = run_command(opt) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(opt: Opt) -> Result<(), Box<dyn std::error::Error>> {
    // Pasted addresses often carry stray whitespace
    let address = opt.address.trim();

    let report = check_address(address, &opt.prefix)?;

    println!(
        "String {} base58 decodes into: {}",
        address,
        HEXLOWER.encode(&report.decoded)
    );
    println!(
        "Checksum is correct: given chk={}, expected: ripemd160(payload)={}",
        HEXLOWER.encode(&report.checksum),
        HEXLOWER.encode(&report.expected_checksum)
    );

    match report.kind {
        AddressKind::Unknown => {
            println!(
                "Warning: payload is {} bytes (unexpected).",
                report.payload.len()
            );
        }
        kind => println!("Type: {kind}"),
    }
    println!("Raw  : 0x{}", HEXLOWER.encode(&report.payload));

    Ok(())
}
