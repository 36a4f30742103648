use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};

use anyhow::{Context, Result};

use nes_cpu::cartridge::Cartridge;
use nes_cpu::cpu::Cpu;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage: {} <rom_file> [reference_log] [max_instructions]",
            args[0]
        );
        std::process::exit(1);
    }

    let rom_path = &args[1];
    let mut reference: Option<Lines<BufReader<File>>> = match args.get(2) {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening reference log {path}"))?;
            Some(BufReader::new(file).lines())
        }
        None => None,
    };
    let limit: Option<u64> = match args.get(3) {
        Some(raw) => Some(raw.parse().context("invalid instruction limit")?),
        None => None,
    };

    log::info!("Loading ROM: {}", rom_path);
    let cartridge =
        Cartridge::load_from_file(rom_path).with_context(|| format!("loading {rom_path}"))?;

    let mut cpu = Cpu::new();
    cpu.load_cartridge(cartridge);

    log::info!("Starting execution at ${:04X}", cpu.pc());

    let mut executed: u64 = 0;
    loop {
        // A new instruction is only fetched once the previous one has paid
        // out its full cycle cost.
        if cpu.cycles_remaining() == 0 {
            let step = cpu.step().context("execution stopped")?;
            let line = step.trace_line();
            println!("{line}");
            executed += 1;

            if let Some(lines) = reference.as_mut() {
                match lines.next() {
                    Some(expected) => {
                        let expected = expected.context("reading reference log")?;
                        if line != expected {
                            println!("Mismatch at instruction {executed}");
                            println!("     ours: {line}");
                            println!("reference: {expected}");
                            break;
                        }
                    }
                    None => {
                        log::info!("Reference log exhausted after {executed} instructions");
                        break;
                    }
                }
            }

            if limit.is_some_and(|max| executed >= max) {
                log::info!("Instruction limit reached");
                break;
            }
        }
        cpu.tick();
    }

    log::info!(
        "Executed {} instructions, {} cycles total",
        executed,
        cpu.total_cycles()
    );
    Ok(())
}
