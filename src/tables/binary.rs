// binary.rs - Generated by tools/gen_tables.py (UCD 14.0.0). Do not edit.
//
// Binary property sets and grapheme-boundary helper sets,
// as compressed interval streams.

pub static WHITE_SPACE: &[u8] = &[
    0x09, 0x05, 0x12, 0x01, 0x64, 0x01, 0x1a, 0x01, 0x95, 0xdf, 0x01, 0x89, 0x7f, 0x0b, 0x1d, 0x02,
    0x05, 0x01, 0x2f, 0x01, 0x8f, 0xa0, 0x01,
];

pub static HEX_DIGIT: &[u8] = &[
    0x30, 0x0a, 0x07, 0x06, 0x1a, 0x06, 0xa0, 0xfe, 0xa9, 0x0a, 0x07, 0x06, 0x1a, 0x06,
];

pub static ASCII_HEX_DIGIT: &[u8] = &[
    0x30, 0x0a, 0x07, 0x06, 0x1a, 0x06,
];

pub static GRAPHEME_EXTEND: &[u8] = &[
    0x83, 0x00, 0x70, 0x81, 0x13, 0x07, 0x81, 0x07, 0x2d, 0x01, 0x01, 0x01, 0x02, 0x01, 0x02, 0x01,
    0x01, 0x48, 0x0b, 0x30, 0x15, 0x10, 0x01, 0x65, 0x07, 0x02, 0x06, 0x02, 0x02, 0x01, 0x04, 0x23,
    0x01, 0x1e, 0x1b, 0x5b, 0x0b, 0x3a, 0x09, 0x09, 0x01, 0x18, 0x04, 0x01, 0x09, 0x01, 0x03, 0x01,
    0x05, 0x2b, 0x03, 0x3c, 0x08, 0x2a, 0x18, 0x01, 0x20, 0x37, 0x01, 0x01, 0x01, 0x04, 0x08, 0x04,
    0x01, 0x03, 0x07, 0x0a, 0x02, 0x1d, 0x01, 0x3a, 0x01, 0x04, 0x04, 0x08, 0x01, 0x14, 0x02, 0x1a,
    0x01, 0x02, 0x02, 0x39, 0x01, 0x04, 0x02, 0x04, 0x02, 0x02, 0x03, 0x03, 0x01, 0x1e, 0x02, 0x03,
    0x01, 0x0b, 0x02, 0x39, 0x01, 0x04, 0x05, 0x01, 0x02, 0x04, 0x01, 0x14, 0x02, 0x16, 0x06, 0x01,
    0x01, 0x3a, 0x01, 0x02, 0x01, 0x01, 0x04, 0x08, 0x01, 0x07, 0x02, 0x0b, 0x02, 0x1e, 0x01, 0x3d,
    0x01, 0x0c, 0x01, 0x32, 0x01, 0x03, 0x01, 0x37, 0x01, 0x01, 0x03, 0x05, 0x03, 0x01, 0x04, 0x07,
    0x02, 0x0b, 0x02, 0x1d, 0x01, 0x3a, 0x01, 0x02, 0x01, 0x06, 0x01, 0x05, 0x02, 0x14, 0x02, 0x1c,
    0x02, 0x39, 0x02, 0x04, 0x04, 0x08, 0x01, 0x14, 0x02, 0x1d, 0x01, 0x48, 0x01, 0x07, 0x03, 0x01,
    0x01, 0x5a, 0x01, 0x02, 0x07, 0x0c, 0x08, 0x62, 0x01, 0x02, 0x09, 0x0b, 0x06, 0x4a, 0x02, 0x1b,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x37, 0x0e, 0x01, 0x05, 0x01, 0x02, 0x05, 0x0b, 0x01, 0x24, 0x09,
    0x01, 0x66, 0x04, 0x01, 0x06, 0x01, 0x02, 0x02, 0x02, 0x19, 0x02, 0x04, 0x03, 0x10, 0x04, 0x0d,
    0x01, 0x02, 0x02, 0x06, 0x01, 0x0f, 0x01, 0x82, 0xbf, 0x03, 0x83, 0xb2, 0x03, 0x1d, 0x02, 0x1e,
    0x02, 0x1e, 0x02, 0x40, 0x02, 0x01, 0x07, 0x08, 0x01, 0x02, 0x0b, 0x09, 0x01, 0x2d, 0x03, 0x01,
    0x01, 0x75, 0x02, 0x22, 0x01, 0x76, 0x03, 0x04, 0x02, 0x09, 0x01, 0x06, 0x03, 0x80, 0xdb, 0x02,
    0x02, 0x01, 0x3a, 0x01, 0x01, 0x07, 0x01, 0x01, 0x01, 0x01, 0x02, 0x08, 0x06, 0x0a, 0x02, 0x01,
    0x30, 0x1f, 0x31, 0x04, 0x30, 0x01, 0x01, 0x05, 0x01, 0x01, 0x05, 0x01, 0x28, 0x09, 0x0c, 0x02,
    0x20, 0x04, 0x02, 0x02, 0x01, 0x03, 0x38, 0x01, 0x01, 0x02, 0x03, 0x01, 0x01, 0x03, 0x3a, 0x08,
    0x02, 0x02, 0x80, 0x98, 0x03, 0x01, 0x0d, 0x01, 0x07, 0x04, 0x01, 0x06, 0x01, 0x03, 0x02, 0x80,
    0xc6, 0x40, 0x82, 0x0c, 0x02, 0x80, 0xc2, 0x21, 0x8b, 0xfe, 0x03, 0x80, 0x8d, 0x01, 0x60, 0x20,
    0x82, 0x2a, 0x04, 0x6b, 0x02, 0xa0, 0x75, 0xd4, 0x04, 0x01, 0x0a, 0x20, 0x02, 0x50, 0x02, 0x81,
    0x10, 0x01, 0x03, 0x01, 0x04, 0x01, 0x19, 0x02, 0x05, 0x01, 0x80, 0x97, 0x02, 0x1a, 0x12, 0x0d,
    0x01, 0x26, 0x08, 0x19, 0x0b, 0x2e, 0x03, 0x30, 0x01, 0x02, 0x04, 0x02, 0x02, 0x27, 0x01, 0x43,
    0x06, 0x02, 0x02, 0x02, 0x02, 0x0c, 0x01, 0x08, 0x01, 0x2f, 0x01, 0x33, 0x01, 0x01, 0x03, 0x02,
    0x02, 0x05, 0x02, 0x01, 0x01, 0x2a, 0x02, 0x08, 0x01, 0x80, 0xee, 0x01, 0x02, 0x01, 0x04, 0x01,
    0xa0, 0x4f, 0x30, 0x01, 0x82, 0xe1, 0x10, 0x10, 0x10, 0x83, 0xcd, 0x01, 0x80, 0xe2, 0x01, 0x80,
    0x95, 0x05, 0x86, 0x86, 0x03, 0x01, 0x02, 0x05, 0x04, 0x28, 0x03, 0x04, 0x01, 0x80, 0xa5, 0x02,
    0x82, 0x3d, 0x04, 0x81, 0x83, 0x02, 0x80, 0x99, 0x0b, 0x31, 0x04, 0x7b, 0x01, 0x36, 0x0f, 0x29,
    0x01, 0x02, 0x02, 0x0a, 0x03, 0x31, 0x04, 0x02, 0x02, 0x07, 0x01, 0x3d, 0x03, 0x24, 0x05, 0x01,
    0x08, 0x3e, 0x01, 0x0c, 0x02, 0x34, 0x09, 0x0a, 0x04, 0x02, 0x01, 0x5f, 0x03, 0x02, 0x01, 0x01,
    0x02, 0x06, 0x01, 0x80, 0xa0, 0x01, 0x03, 0x08, 0x15, 0x02, 0x39, 0x02, 0x03, 0x01, 0x25, 0x07,
    0x03, 0x05, 0x80, 0xc3, 0x08, 0x02, 0x03, 0x01, 0x01, 0x17, 0x01, 0x54, 0x06, 0x01, 0x01, 0x04,
    0x02, 0x01, 0x02, 0x80, 0xee, 0x04, 0x06, 0x02, 0x01, 0x02, 0x1b, 0x02, 0x55, 0x08, 0x02, 0x01,
    0x01, 0x02, 0x6a, 0x01, 0x01, 0x01, 0x02, 0x06, 0x01, 0x01, 0x65, 0x03, 0x02, 0x04, 0x01, 0x05,
    0x81, 0x03, 0x09, 0x01, 0x02, 0x81, 0x00, 0x02, 0x01, 0x01, 0x04, 0x01, 0x80, 0x90, 0x04, 0x02,
    0x02, 0x04, 0x01, 0x20, 0x0a, 0x28, 0x06, 0x02, 0x04, 0x08, 0x01, 0x09, 0x06, 0x02, 0x03, 0x2e,
    0x0d, 0x01, 0x02, 0x81, 0x96, 0x07, 0x01, 0x06, 0x01, 0x01, 0x52, 0x16, 0x02, 0x07, 0x01, 0x02,
    0x01, 0x02, 0x7a, 0x06, 0x03, 0x01, 0x01, 0x02, 0x01, 0x07, 0x01, 0x01, 0x48, 0x02, 0x03, 0x01,
    0x01, 0x01, 0x81, 0x5b, 0x02, 0xa0, 0x4b, 0xfb, 0x05, 0x3b, 0x07, 0x84, 0x18, 0x01, 0x3f, 0x04,
    0x51, 0x01, 0xa0, 0x4c, 0xb8, 0x02, 0x92, 0x61, 0x2e, 0x02, 0x17, 0x82, 0x20, 0x03, 0x11, 0x08,
    0x02, 0x07, 0x1e, 0x04, 0x80, 0x94, 0x03, 0x87, 0xbb, 0x37, 0x04, 0x32, 0x08, 0x01, 0x0e, 0x01,
    0x16, 0x05, 0x01, 0x0f, 0x85, 0x50, 0x07, 0x01, 0x11, 0x02, 0x07, 0x01, 0x02, 0x01, 0x05, 0x81,
    0x05, 0x07, 0x81, 0x77, 0x01, 0x3d, 0x04, 0x85, 0xe0, 0x07, 0x6d, 0x07, 0xac, 0x17, 0xb5, 0x80,
    0xf0,
];

pub static SPACING_MARK: &[u8] = &[
    0x89, 0x03, 0x01, 0x37, 0x01, 0x02, 0x03, 0x08, 0x04, 0x01, 0x02, 0x32, 0x02, 0x3a, 0x03, 0x06,
    0x02, 0x02, 0x02, 0x0a, 0x01, 0x2b, 0x01, 0x3a, 0x03, 0x42, 0x01, 0x3a, 0x03, 0x08, 0x01, 0x01,
    0x02, 0x35, 0x02, 0x3a, 0x01, 0x01, 0x01, 0x06, 0x02, 0x02, 0x02, 0x0a, 0x01, 0x66, 0x02, 0x01,
    0x02, 0x03, 0x03, 0x01, 0x03, 0x0a, 0x01, 0x29, 0x03, 0x3d, 0x04, 0x3d, 0x02, 0x3a, 0x01, 0x01,
    0x05, 0x02, 0x02, 0x01, 0x02, 0x09, 0x02, 0x2b, 0x02, 0x3a, 0x03, 0x05, 0x03, 0x01, 0x03, 0x0a,
    0x01, 0x2a, 0x02, 0x4b, 0x03, 0x06, 0x08, 0x12, 0x02, 0x81, 0x4a, 0x02, 0x3f, 0x01, 0x80, 0xab,
    0x02, 0x04, 0x01, 0x06, 0x01, 0x02, 0x02, 0x19, 0x02, 0x0a, 0x03, 0x02, 0x07, 0x15, 0x02, 0x02,
    0x06, 0x02, 0x01, 0x0a, 0x03, 0x86, 0x78, 0x01, 0x1e, 0x01, 0x80, 0x81, 0x01, 0x07, 0x08, 0x01,
    0x02, 0x81, 0x5a, 0x04, 0x02, 0x03, 0x04, 0x02, 0x01, 0x06, 0x80, 0xe0, 0x02, 0x3a, 0x01, 0x01,
    0x01, 0x09, 0x01, 0x01, 0x02, 0x08, 0x06, 0x80, 0x91, 0x01, 0x30, 0x01, 0x05, 0x01, 0x01, 0x05,
    0x01, 0x02, 0x3d, 0x01, 0x1e, 0x01, 0x04, 0x02, 0x02, 0x01, 0x3c, 0x01, 0x02, 0x03, 0x01, 0x01,
    0x03, 0x02, 0x30, 0x08, 0x08, 0x02, 0x80, 0xab, 0x01, 0x15, 0x01, 0x93, 0x36, 0x02, 0xa0, 0x77,
    0xf3, 0x02, 0x02, 0x01, 0x58, 0x02, 0x32, 0x10, 0x80, 0x8e, 0x02, 0x2f, 0x01, 0x30, 0x02, 0x04,
    0x02, 0x02, 0x03, 0x6e, 0x02, 0x02, 0x02, 0x18, 0x01, 0x2d, 0x01, 0x01, 0x01, 0x6d, 0x01, 0x02,
    0x02, 0x05, 0x01, 0x80, 0xed, 0x02, 0x01, 0x02, 0x01, 0x02, 0x01, 0x01, 0xa0, 0x64, 0x13, 0x01,
    0x01, 0x01, 0x7f, 0x01, 0x2d, 0x03, 0x04, 0x02, 0x73, 0x01, 0x18, 0x02, 0x3b, 0x01, 0x30, 0x03,
    0x09, 0x02, 0x0d, 0x01, 0x5d, 0x03, 0x03, 0x02, 0x01, 0x01, 0x80, 0xaa, 0x03, 0x1f, 0x02, 0x3a,
    0x02, 0x01, 0x04, 0x02, 0x02, 0x02, 0x03, 0x09, 0x01, 0x0a, 0x02, 0x80, 0xd1, 0x03, 0x08, 0x02,
    0x03, 0x01, 0x6a, 0x03, 0x06, 0x01, 0x01, 0x04, 0x02, 0x01, 0x80, 0xed, 0x03, 0x06, 0x04, 0x02,
    0x01, 0x71, 0x03, 0x08, 0x02, 0x01, 0x01, 0x6d, 0x01, 0x01, 0x02, 0x06, 0x01, 0x69, 0x02, 0x04,
    0x01, 0x81, 0x05, 0x03, 0x09, 0x01, 0x80, 0xf7, 0x06, 0x01, 0x02, 0x04, 0x01, 0x02, 0x01, 0x01,
    0x01, 0x80, 0x8e, 0x03, 0x08, 0x04, 0x04, 0x01, 0x54, 0x01, 0x1d, 0x02, 0x3e, 0x01, 0x81, 0x97,
    0x01, 0x0e, 0x01, 0x6a, 0x01, 0x07, 0x01, 0x02, 0x01, 0x80, 0xd5, 0x05, 0x04, 0x02, 0x01, 0x01,
    0x81, 0x5e, 0x02, 0xa0, 0x50, 0x5a, 0x37, 0x68, 0x02, 0xa0, 0x61, 0x73, 0x02, 0x06, 0x06,
];

pub static GRAPHEME_CONTROL: &[u8] = &[
    0x00, 0x20, 0x5f, 0x21, 0x9f, 0x88, 0x02,
];

