use std::env;

use anyhow::Result;

use nes_cpu::cartridge::Cartridge;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <rom_file>", args[0]);
        std::process::exit(1);
    }

    let rom_path = &args[1];
    println!("Loading ROM: {}", rom_path);

    let cartridge = Cartridge::load_from_file(rom_path)?;

    println!("\n=== Header ===");
    for byte in cartridge.header {
        print!("{:02X} ", byte);
    }
    println!();

    println!("\n=== ROM Information ===");
    println!("Mapper: {}", cartridge.mapper);
    println!("Mirroring: {:?}", cartridge.mirroring);
    println!("Battery backed: {}", cartridge.battery_backed);
    println!(
        "PRG ROM size: {} bytes ({} KB)",
        cartridge.prg_rom.len(),
        cartridge.prg_rom.len() / 1024
    );
    if cartridge.has_chr_ram() {
        println!("CHR: RAM (no ROM data in image)");
    } else {
        println!(
            "CHR ROM size: {} bytes ({} KB)",
            cartridge.chr_rom.len(),
            cartridge.chr_rom.len() / 1024
        );
    }

    println!("\n=== First 16 bytes of PRG ROM ===");
    for (i, byte) in cartridge.prg_rom.iter().take(16).enumerate() {
        if i % 8 == 0 && i > 0 {
            println!();
        }
        print!("{:02X} ", byte);
    }
    println!();

    // The interrupt vectors sit in the last six bytes of the mapped window.
    if cartridge.prg_rom.len() >= 6 {
        let tail = &cartridge.prg_rom[cartridge.prg_rom.len() - 6..];
        println!("\n=== Vectors ===");
        println!("NMI:   {:02X} {:02X} => ${:04X}", tail[0], tail[1], (tail[1] as u16) << 8 | tail[0] as u16);
        println!("RESET: {:02X} {:02X} => ${:04X}", tail[2], tail[3], (tail[3] as u16) << 8 | tail[2] as u16);
        println!("IRQ:   {:02X} {:02X} => ${:04X}", tail[4], tail[5], (tail[5] as u16) << 8 | tail[4] as u16);
    }

    Ok(())
}
