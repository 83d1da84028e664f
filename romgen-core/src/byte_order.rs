/// Exchanges the high and low byte of a cell.
pub fn swap_bytes(value: u16) -> u16 {
    (value << 8) | (value >> 8)
}

/// Converts every cell in place from host order to the order the EEPROM
/// programmer expects.
pub fn swap_all(cells: &mut [u16]) {
    for cell in cells.iter_mut() {
        *cell = swap_bytes(*cell);
    }
}
