//! Reference dump used by the parser and writer tests

/// Checksum base that validates the reference dump
pub(crate) const LOWSTRS1_CHECKSUM_BASE: u16 = 0x5A3C;

/// Body of the factory patch "LOWSTRS1", nybble-unpacked
pub(crate) const LOWSTRS1: [u8; crate::SINGLE_BODY_SIZE] = [
    0x4C, 0x4F, 0x57, 0x53, 0x54, 0x52, 0x53, 0x31, 0x3F, 0xFB, 0x00, 0x00, 0x00, 0x00, 0xFA, 0x06,
    0x00, 0x00, 0x0A, 0x02, 0xF4, 0xF4, 0x00, 0xF6, 0x40, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10,
    0x10, 0x10, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x00, 0x00, 0xE1, 0xE1, 0x00, 0x00, 0x63, 0x63,
    0x4F, 0x57, 0x45, 0x4C, 0x3F, 0x50, 0x3A, 0x46, 0x36, 0x40, 0x33, 0x44, 0x30, 0x46, 0x2E, 0x46,
    0x2C, 0x39, 0x29, 0x23, 0x28, 0x21, 0x26, 0x27, 0x24, 0x31, 0x24, 0x32, 0x21, 0x2B, 0x21, 0x29,
    0x20, 0x2D, 0x1E, 0x28, 0x1E, 0x26, 0x1C, 0x28, 0x1B, 0x26, 0x1B, 0x22, 0x19, 0x27, 0x19, 0x27,
    0x18, 0x23, 0x16, 0x24, 0x16, 0x24, 0x13, 0x23, 0x11, 0x24, 0x11, 0x24, 0x0C, 0x22, 0x0D, 0x1F,
    0x0B, 0x1D, 0x09, 0x1B, 0x0D, 0x1A, 0x08, 0x19, 0x0B, 0x18, 0x0B, 0x19, 0x08, 0x19, 0x0C, 0x1A,
    0x09, 0x19, 0x0A, 0x1C, 0x0C, 0x1C, 0x08, 0x1A, 0x0C, 0x1C, 0x0B, 0x1C, 0x09, 0x1B, 0x0D, 0x1B,
    0x09, 0x1A, 0x0B, 0x1A, 0x0B, 0x1C, 0x07, 0x1E, 0x0B, 0x20, 0x08, 0x21, 0x06, 0x20, 0x09, 0x1F,
    0x03, 0x20, 0x05, 0x21, 0x04, 0x22, 0x00, 0x21, 0x03, 0x20, 0x00, 0x1C, 0x80, 0x80, 0x80, 0x80,
    0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, 0x00, 0x80, 0x80,
    0x80, 0x80, 0x00, 0x00, 0x00, 0x00, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, 0x00, 0x80, 0x80,
    0x80, 0x80, 0x00, 0x00, 0x80, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x80, 0x00, 0x00, 0x30, 0x30, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x9F, 0x82, 0x82, 0x01, 0x01,
    0x3F, 0x3F, 0x09, 0x08, 0xAB, 0xA8, 0x80, 0x80, 0x01, 0x01, 0x1D, 0x3F, 0x9F, 0x9F, 0x1F, 0x1F,
    0x1F, 0x1F, 0x1F, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x10, 0x10, 0x10, 0x11, 0x11,
    0x15, 0x15, 0x00, 0x00, 0x59, 0x59, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x10, 0x10, 0x10, 0x10, 0x0E, 0x0E, 0x15, 0x15, 0x00, 0x00, 0x59, 0x59, 0x1F, 0x1F,
    0x1F, 0x1F, 0x1F, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x10, 0x10, 0x10, 0x0E, 0x0E,
    0x15, 0x15, 0x00, 0x00, 0x59, 0x59, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x11, 0x11, 0x10, 0x10, 0x0E, 0x0E, 0x15, 0x15, 0x00, 0x00, 0x40, 0x40, 0x1F, 0x1F,
    0x13, 0x13, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x0A, 0x0A, 0x00, 0x00, 0x00, 0x03,
    0xC0, 0xC0, 0x00, 0x00, 0x08, 0x08, 0x0D, 0x0D, 0x0F, 0x0F, 0x0A, 0x0A, 0x00, 0x00, 0x19, 0x19,
    0x1F, 0x1F, 0x0C, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x80, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x13, 0x16, 0x17, 0x17, 0x16, 0x16, 0x15, 0x15,
    0x13, 0x13, 0x0B, 0x0B, 0x00, 0x00, 0x19, 0x19, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x01, 0x3E, 0x00, 0x0A, 0x06, 0x06, 0xF9, 0xF9, 0x38, 0x38, 0x3B, 0x3B,
    0x3B, 0x3B, 0x3B, 0x3F, 0x3C, 0x3D, 0x3D, 0x3B, 0x3B, 0x00, 0x44, 0x83,
];
