use crate::byte_order;
use crate::error::{Result, RomError};

/// Width of the EEPROM address bus.
pub const ADDRESS_WIDTH: u32 = 16;

/// Value burned into every cell.
pub const FILL_VALUE: u16 = 0x1234;

/// Parameters of the image to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomConfig {
    /// Number of address bits. The image holds 2^address_width cells.
    pub address_width: u32,

    /// Value written to every cell before the byte-order transform.
    pub fill_value: u16,
}

impl Default for RomConfig {
    fn default() -> Self {
        Self {
            address_width: ADDRESS_WIDTH,
            fill_value: FILL_VALUE,
        }
    }
}

/// Number of cells addressable with `address_width` bits.
pub fn capacity(address_width: u32) -> Result<usize> {
    1usize
        .checked_shl(address_width)
        .ok_or(RomError::AddressWidthTooLarge(address_width))
}

pub struct RomImage {
    cells: Vec<u16>,
}

impl std::fmt::Debug for RomImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("RomImage");
        s.field("cells", &self.cells.len());
        s.field("first", &self.cells.first());
        s.finish()
    }
}

impl RomImage {
    /// Allocates an image covering the whole address space and fills every
    /// cell with `config.fill_value`.
    pub fn filled(config: &RomConfig) -> Result<Self> {
        let cells = capacity(config.address_width)?;

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(cells)
            .map_err(|_| RomError::AllocationFailed { cells })?;
        buffer.resize(cells, config.fill_value);

        log::debug!(
            "Allocated {} cells filled with {:#06x}",
            cells,
            config.fill_value
        );

        Ok(Self { cells: buffer })
    }

    pub fn swap_bytes(&mut self) {
        byte_order::swap_all(&mut self.cells);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Size of the image on disk.
    pub fn byte_len(&self) -> usize {
        self.cells.len() * std::mem::size_of::<u16>()
    }

    pub fn cells(&self) -> &[u16] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_exact_power_of_two() {
        assert_eq!(1, capacity(0).unwrap());
        assert_eq!(256, capacity(8).unwrap());
        assert_eq!(65536, capacity(16).unwrap());
        assert_eq!(1 << 20, capacity(20).unwrap());
    }

    #[test]
    fn capacity_rejects_oversize_width() {
        let width = usize::BITS;
        assert!(matches!(
            capacity(width),
            Err(RomError::AddressWidthTooLarge(w)) if w == width
        ));
        assert!(capacity(u32::MAX).is_err());
    }

    #[test]
    fn default_config_matches_programmer_constants() {
        let config = RomConfig::default();
        assert_eq!(16, config.address_width);
        assert_eq!(0x1234, config.fill_value);
    }

    #[test]
    fn filled_image_covers_address_space() {
        let image = RomImage::filled(&RomConfig::default()).unwrap();
        assert_eq!(65536, image.len());
        assert_eq!(131072, image.byte_len());
        assert!(image.cells().iter().all(|&cell| cell == 0x1234));
    }

    #[test]
    fn swap_bytes_transforms_every_cell() {
        let config = RomConfig {
            address_width: 4,
            fill_value: 0xbeef,
        };
        let mut image = RomImage::filled(&config).unwrap();
        image.swap_bytes();
        assert_eq!(16, image.len());
        assert!(image.cells().iter().all(|&cell| cell == 0xefbe));
    }

    #[test]
    fn filled_rejects_oversize_width() {
        let config = RomConfig {
            address_width: 200,
            ..RomConfig::default()
        };
        assert!(matches!(
            RomImage::filled(&config),
            Err(RomError::AddressWidthTooLarge(200))
        ));
    }

    #[test]
    fn filled_reports_allocation_failure() {
        // 2^(BITS - 1) cells of two bytes each can never be reserved.
        let config = RomConfig {
            address_width: usize::BITS - 1,
            ..RomConfig::default()
        };
        assert!(matches!(
            RomImage::filled(&config),
            Err(RomError::AllocationFailed { .. })
        ));
    }
}
