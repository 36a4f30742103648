use std::fs;
use std::path::Path;

use thiserror::Error;

pub const HEADER_LEN: usize = 16;
const PRG_BANK_SIZE: usize = 0x4000;
const CHR_BANK_SIZE: usize = 0x2000;
const TRAINER_SIZE: usize = 512;
const MAGIC: [u8; 4] = *b"NES\x1A";

#[derive(Debug, Error)]
pub enum CartridgeError {
    #[error("failed to read ROM image: {0}")]
    Io(#[from] std::io::Error),
    #[error("ROM image too small for an iNES header")]
    MissingHeader,
    #[error("invalid iNES magic bytes")]
    BadMagic,
    #[error("ROM image truncated: expected {expected} bytes, found {found}")]
    Truncated { expected: usize, found: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    FourScreen,
}

/// A parsed iNES image. The CPU core consumes only the program ROM; the
/// rest of the header (mapper, mirroring, battery) is parsed for inspection
/// but not acted on.
#[derive(Debug)]
pub struct Cartridge {
    pub header: [u8; HEADER_LEN],
    pub prg_rom: Vec<u8>,
    /// Empty means the board carries character RAM instead.
    pub chr_rom: Vec<u8>,
    pub mapper: u8,
    pub mirroring: Mirroring,
    pub battery_backed: bool,
}

impl Cartridge {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CartridgeError> {
        let data = fs::read(path)?;
        Self::load_from_bytes(&data)
    }

    pub fn load_from_bytes(data: &[u8]) -> Result<Self, CartridgeError> {
        if data.len() < HEADER_LEN {
            return Err(CartridgeError::MissingHeader);
        }
        if data[0..4] != MAGIC {
            return Err(CartridgeError::BadMagic);
        }

        let mut header = [0u8; HEADER_LEN];
        header.copy_from_slice(&data[..HEADER_LEN]);

        let prg_size = data[4] as usize * PRG_BANK_SIZE;
        let chr_size = data[5] as usize * CHR_BANK_SIZE;

        let flags_6 = data[6];
        let flags_7 = data[7];

        let mirroring = if flags_6 & 0x08 != 0 {
            Mirroring::FourScreen
        } else if flags_6 & 0x01 != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };
        let battery_backed = flags_6 & 0x02 != 0;
        let trainer_present = flags_6 & 0x04 != 0;
        let mapper = (flags_7 & 0xF0) | (flags_6 >> 4);

        let prg_start = HEADER_LEN + if trainer_present { TRAINER_SIZE } else { 0 };
        let chr_start = prg_start + prg_size;
        if data.len() < chr_start + chr_size {
            return Err(CartridgeError::Truncated {
                expected: chr_start + chr_size,
                found: data.len(),
            });
        }

        let prg_rom = data[prg_start..chr_start].to_vec();
        let chr_rom = data[chr_start..chr_start + chr_size].to_vec();

        log::info!(
            "Cartridge: {} x 16KB PRG, {} x 8KB CHR, mapper {}, {:?} mirroring",
            data[4],
            data[5],
            mapper,
            mirroring
        );
        if chr_rom.is_empty() {
            log::debug!("No CHR ROM present, board uses CHR RAM");
        }

        Ok(Cartridge {
            header,
            prg_rom,
            chr_rom,
            mapper,
            mirroring,
            battery_backed,
        })
    }

    pub fn has_chr_ram(&self) -> bool {
        self.chr_rom.is_empty()
    }
}
