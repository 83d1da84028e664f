use bitflags::bitflags;

bitflags! {
    /// Control-unit signals of the target CPU, one bit per line of a
    /// 16-bit microcode word. Bit 7 is not wired.
    pub struct ControlLines: u16 {
        /// Halt clock
        const HLT  = 1 << 15;
        /// Memory address register in
        const MI   = 1 << 14;
        /// RAM in
        const RI   = 1 << 13;
        /// RAM out
        const RO   = 1 << 12;
        /// Instruction register out
        const IO   = 1 << 11;
        /// Instruction register in
        const II   = 1 << 10;
        /// A register in
        const AI   = 1 << 9;
        /// A register out
        const AO   = 1 << 8;
        /// ALU out
        const ALUO = 1 << 6;
        /// ALU subtract
        const SU   = 1 << 5;
        /// B register in
        const BI   = 1 << 4;
        /// B register out
        const BO   = 1 << 3;
        /// Counter enable
        const CE   = 1 << 2;
        /// Counter out
        const CO   = 1 << 1;
        /// Jump (counter in)
        const JUMP = 1 << 0;
    }
}

/// Every signal by name, most significant bit first.
pub const SIGNALS: [(&str, ControlLines); 15] = [
    ("HLT", ControlLines::HLT),
    ("MI", ControlLines::MI),
    ("RI", ControlLines::RI),
    ("RO", ControlLines::RO),
    ("IO", ControlLines::IO),
    ("II", ControlLines::II),
    ("AI", ControlLines::AI),
    ("AO", ControlLines::AO),
    ("ALUO", ControlLines::ALUO),
    ("SU", ControlLines::SU),
    ("BI", ControlLines::BI),
    ("BO", ControlLines::BO),
    ("CE", ControlLines::CE),
    ("CO", ControlLines::CO),
    ("JUMP", ControlLines::JUMP),
];
