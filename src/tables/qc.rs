// qc.rs - Generated by tools/gen_tables.py (UCD 14.0.0). Do not edit.
//
// Per-form sets of codepoints with Quick_Check != Yes
// (No and Maybe are not distinguished).

pub static NFD_QC_NOT_ALLOWED: &[u8] = &[
    0x80, 0xc0, 0x06, 0x01, 0x09, 0x01, 0x06, 0x02, 0x05, 0x02, 0x06, 0x01, 0x09, 0x01, 0x06, 0x02,
    0x05, 0x01, 0x11, 0x02, 0x14, 0x02, 0x09, 0x03, 0x04, 0x01, 0x06, 0x04, 0x06, 0x03, 0x06, 0x02,
    0x12, 0x02, 0x17, 0x21, 0x02, 0x0d, 0x02, 0x1c, 0x10, 0x01, 0x06, 0x02, 0x0b, 0x03, 0x02, 0x02,
    0x24, 0x02, 0x02, 0x06, 0x0e, 0x81, 0x0c, 0x02, 0x01, 0x02, 0x2f, 0x01, 0x09, 0x01, 0x06, 0x06,
    0x01, 0x01, 0x01, 0x03, 0x19, 0x07, 0x19, 0x05, 0x04, 0x02, 0x2b, 0x02, 0x01, 0x01, 0x03, 0x01,
    0x04, 0x03, 0x0a, 0x01, 0x1f, 0x01, 0x16, 0x02, 0x01, 0x01, 0x03, 0x01, 0x04, 0x03, 0x17, 0x02,
    0x49, 0x02, 0x0d, 0x04, 0x02, 0x02, 0x02, 0x06, 0x02, 0x06, 0x02, 0x0c, 0x02, 0x02, 0x81, 0x28,
    0x05, 0x80, 0x99, 0x01, 0x01, 0x01, 0x10, 0x01, 0x82, 0x55, 0x01, 0x07, 0x01, 0x02, 0x01, 0x23,
    0x08, 0x6b, 0x02, 0x0f, 0x02, 0x01, 0x01, 0x53, 0x01, 0x02, 0x01, 0x22, 0x03, 0x02, 0x01, 0x80,
    0xe9, 0x01, 0x02, 0x02, 0x0f, 0x02, 0x36, 0x01, 0x35, 0x03, 0x7b, 0x01, 0x77, 0x01, 0x06, 0x02,
    0x01, 0x02, 0x7e, 0x03, 0x80, 0x8d, 0x01, 0x01, 0x03, 0x81, 0x64, 0x01, 0x09, 0x01, 0x04, 0x01,
    0x04, 0x01, 0x04, 0x01, 0x0c, 0x01, 0x09, 0x01, 0x01, 0x02, 0x01, 0x01, 0x08, 0x01, 0x11, 0x01,
    0x09, 0x01, 0x04, 0x01, 0x04, 0x01, 0x04, 0x01, 0x0c, 0x01, 0x6c, 0x01, 0x8a, 0xdf, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x03, 0x01, 0x28, 0x01, 0x01, 0x01, 0x02, 0x02, 0x01,
    0x01, 0x82, 0xbc, 0x80, 0x9a, 0x01, 0x01, 0x04, 0x5a, 0x06, 0x16, 0x02, 0x06, 0x02, 0x26, 0x02,
    0x06, 0x02, 0x08, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x1f, 0x02, 0x35, 0x01, 0x07, 0x01,
    0x01, 0x02, 0x04, 0x01, 0x0e, 0x02, 0x06, 0x01, 0x13, 0x02, 0x03, 0x01, 0x08, 0x02, 0x02, 0x81,
    0x24, 0x01, 0x03, 0x02, 0x6e, 0x02, 0x12, 0x01, 0x1e, 0x03, 0x34, 0x01, 0x04, 0x01, 0x02, 0x01,
    0x17, 0x01, 0x01, 0x01, 0x1a, 0x01, 0x02, 0x01, 0x02, 0x01, 0x01, 0x01, 0x16, 0x01, 0x01, 0x01,
    0x0a, 0x05, 0x02, 0x02, 0x02, 0x02, 0x06, 0x02, 0x02, 0x02, 0x02, 0x02, 0x22, 0x04, 0x30, 0x04,
    0x06, 0x04, 0x3b, 0x02, 0x87, 0xb1, 0x01, 0x85, 0x6f, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x02, 0x01, 0x01, 0x01, 0x01, 0x01, 0x06, 0x02, 0x01, 0x02, 0x01, 0x02, 0x01, 0x02, 0x01, 0x02,
    0x16, 0x01, 0x09, 0x01, 0x0d, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x06, 0x02, 0x01, 0x02, 0x01, 0x02, 0x01, 0x02, 0x01, 0x02, 0x16, 0x01, 0x02, 0x04,
    0x03, 0x01, 0xa0, 0x7b, 0x01, 0xa0, 0x2b, 0xa4, 0xa0, 0x21, 0x5c, 0x81, 0x0e, 0x02, 0x01, 0x01,
    0x01, 0x02, 0x0a, 0x01, 0x01, 0x01, 0x01, 0x02, 0x02, 0x03, 0x44, 0x02, 0x6a, 0x43, 0x01, 0x01,
    0x01, 0x0a, 0x0d, 0x01, 0x05, 0x01, 0x01, 0x01, 0x02, 0x01, 0x02, 0x01, 0x09, 0x95, 0x4b, 0x01,
    0x01, 0x01, 0x0e, 0x01, 0x80, 0x82, 0x02, 0x82, 0x1b, 0x02, 0x81, 0x6e, 0x02, 0x01, 0x01, 0x80,
    0xfb, 0x02, 0x83, 0x7c, 0x01, 0xa0, 0xb8, 0x25, 0x07, 0x56, 0x06, 0xa1, 0x26, 0x3f, 0x82, 0x1e,
];

pub static NFC_QC_NOT_ALLOWED: &[u8] = &[
    0x83, 0x00, 0x05, 0x01, 0x07, 0x02, 0x01, 0x01, 0x01, 0x01, 0x02, 0x06, 0x01, 0x07, 0x06, 0x04,
    0x02, 0x01, 0x02, 0x06, 0x01, 0x07, 0x06, 0x2e, 0x01, 0x09, 0x01, 0x08, 0x01, 0x82, 0xcb, 0x03,
    0x82, 0xe6, 0x01, 0x1b, 0x08, 0x5e, 0x01, 0x18, 0x01, 0x04, 0x02, 0x01, 0x01, 0x53, 0x01, 0x02,
    0x01, 0x22, 0x03, 0x02, 0x01, 0x80, 0xdf, 0x01, 0x17, 0x02, 0x04, 0x02, 0x60, 0x01, 0x18, 0x01,
    0x7e, 0x01, 0x6b, 0x01, 0x12, 0x02, 0x67, 0x01, 0x18, 0x01, 0x72, 0x01, 0x04, 0x01, 0x0f, 0x01,
    0x81, 0x63, 0x01, 0x09, 0x01, 0x04, 0x01, 0x04, 0x01, 0x04, 0x01, 0x0c, 0x01, 0x09, 0x01, 0x01,
    0x02, 0x01, 0x01, 0x08, 0x01, 0x11, 0x01, 0x09, 0x01, 0x04, 0x01, 0x04, 0x01, 0x04, 0x01, 0x0c,
    0x01, 0x74, 0x01, 0x81, 0x32, 0x15, 0x32, 0x1b, 0x89, 0x72, 0x01, 0x84, 0x3b, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x3d, 0x01, 0x02, 0x01, 0x0a, 0x01,
    0x01, 0x01, 0x07, 0x01, 0x07, 0x01, 0x07, 0x01, 0x07, 0x01, 0x02, 0x02, 0x09, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x02, 0x02, 0x81, 0x24, 0x01, 0x03, 0x02, 0x81, 0xfd, 0x02, 0x87, 0xb1, 0x01, 0x85,
    0xbc, 0x02, 0xa0, 0xc8, 0x65, 0x81, 0x0e, 0x02, 0x01, 0x01, 0x01, 0x02, 0x0a, 0x01, 0x01, 0x01,
    0x01, 0x02, 0x02, 0x03, 0x44, 0x02, 0x6a, 0x43, 0x01, 0x01, 0x01, 0x0a, 0x0d, 0x01, 0x05, 0x01,
    0x01, 0x01, 0x02, 0x01, 0x02, 0x01, 0x09, 0x95, 0x6b, 0x01, 0x6c, 0x01, 0x82, 0x16, 0x01, 0x18,
    0x01, 0x81, 0x58, 0x01, 0x09, 0x01, 0x02, 0x01, 0x80, 0xf1, 0x01, 0x83, 0x80, 0x01, 0xa0, 0xb8,
    0x2d, 0x07, 0x56, 0x06, 0xa1, 0x26, 0x3f, 0x82, 0x1e,
];

pub static NFKD_QC_NOT_ALLOWED: &[u8] = &[
    0x80, 0xa0, 0x01, 0x07, 0x01, 0x01, 0x01, 0x04, 0x01, 0x02, 0x04, 0x02, 0x03, 0x01, 0x03, 0x01,
    0x06, 0x01, 0x09, 0x01, 0x06, 0x02, 0x05, 0x02, 0x06, 0x01, 0x09, 0x01, 0x06, 0x02, 0x05, 0x01,
    0x11, 0x02, 0x14, 0x02, 0x09, 0x01, 0x06, 0x01, 0x08, 0x02, 0x07, 0x02, 0x06, 0x02, 0x12, 0x02,
    0x18, 0x20, 0x02, 0x0d, 0x02, 0x13, 0x19, 0x01, 0x06, 0x02, 0x10, 0x02, 0x24, 0x02, 0x02, 0x06,
    0x0e, 0x7c, 0x09, 0x1f, 0x06, 0x02, 0x05, 0x5b, 0x02, 0x01, 0x02, 0x2f, 0x01, 0x05, 0x01, 0x03,
    0x01, 0x05, 0x07, 0x01, 0x01, 0x01, 0x03, 0x19, 0x07, 0x19, 0x05, 0x01, 0x07, 0x19, 0x03, 0x01,
    0x02, 0x03, 0x01, 0x06, 0x02, 0x01, 0x01, 0x03, 0x01, 0x04, 0x03, 0x0a, 0x01, 0x1f, 0x01, 0x16,
    0x02, 0x01, 0x01, 0x03, 0x01, 0x04, 0x03, 0x17, 0x02, 0x49, 0x02, 0x0d, 0x04, 0x02, 0x02, 0x02,
    0x06, 0x02, 0x06, 0x02, 0x0c, 0x02, 0x02, 0x80, 0x8d, 0x01, 0x80, 0x9a, 0x05, 0x4e, 0x04, 0x47,
    0x01, 0x01, 0x01, 0x10, 0x01, 0x82, 0x55, 0x01, 0x07, 0x01, 0x02, 0x01, 0x23, 0x08, 0x6b, 0x02,
    0x0f, 0x02, 0x01, 0x01, 0x53, 0x01, 0x02, 0x01, 0x22, 0x03, 0x02, 0x01, 0x80, 0xe9, 0x01, 0x02,
    0x02, 0x0f, 0x02, 0x36, 0x01, 0x35, 0x03, 0x7b, 0x01, 0x77, 0x01, 0x06, 0x02, 0x01, 0x02, 0x7e,
    0x03, 0x80, 0x8d, 0x01, 0x01, 0x03, 0x54, 0x01, 0x7f, 0x01, 0x28, 0x02, 0x2e, 0x01, 0x36, 0x01,
    0x09, 0x01, 0x04, 0x01, 0x04, 0x01, 0x04, 0x01, 0x0c, 0x01, 0x09, 0x01, 0x01, 0x05, 0x07, 0x01,
    0x11, 0x01, 0x09, 0x01, 0x04, 0x01, 0x04, 0x01, 0x04, 0x01, 0x0c, 0x01, 0x6c, 0x01, 0x80, 0xd5,
    0x01, 0x8a, 0x09, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x03, 0x01, 0x28, 0x01,
    0x01, 0x01, 0x02, 0x02, 0x01, 0x01, 0x81, 0xe8, 0x03, 0x01, 0x0b, 0x01, 0x12, 0x01, 0x1c, 0x0d,
    0x01, 0x22, 0x25, 0x40, 0x80, 0x9c, 0x04, 0x5a, 0x06, 0x16, 0x02, 0x06, 0x02, 0x26, 0x02, 0x06,
    0x02, 0x08, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x1f, 0x02, 0x35, 0x01, 0x0f, 0x01, 0x0e,
    0x02, 0x06, 0x01, 0x13, 0x02, 0x03, 0x01, 0x09, 0x01, 0x0b, 0x06, 0x01, 0x05, 0x01, 0x0c, 0x03,
    0x08, 0x01, 0x03, 0x02, 0x01, 0x02, 0x04, 0x01, 0x01, 0x01, 0x08, 0x03, 0x0d, 0x01, 0x07, 0x01,
    0x10, 0x02, 0x02, 0x1b, 0x01, 0x0d, 0x0b, 0x01, 0x57, 0x04, 0x01, 0x03, 0x01, 0x0b, 0x01, 0x02,
    0x02, 0x05, 0x02, 0x03, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x04, 0x01, 0x03, 0x01, 0x07,
    0x01, 0x06, 0x04, 0x05, 0x06, 0x30, 0x09, 0x01, 0x10, 0x02, 0x12, 0x01, 0x1e, 0x03, 0x34, 0x01,
    0x04, 0x01, 0x02, 0x01, 0x17, 0x01, 0x01, 0x01, 0x05, 0x02, 0x01, 0x02, 0x10, 0x01, 0x02, 0x01,
    0x02, 0x01, 0x01, 0x01, 0x16, 0x01, 0x01, 0x01, 0x0a, 0x05, 0x02, 0x02, 0x02, 0x02, 0x06, 0x02,
    0x02, 0x02, 0x02, 0x02, 0x22, 0x04, 0x30, 0x04, 0x06, 0x04, 0x3b, 0x02, 0x81, 0x35, 0x80, 0x8b,
    0x85, 0x21, 0x01, 0x67, 0x03, 0x65, 0x01, 0x81, 0x9f, 0x02, 0x80, 0xf1, 0x01, 0x81, 0x2f, 0x01,
    0x53, 0x01, 0x0c, 0x80, 0xd6, 0x2a, 0x01, 0x35, 0x01, 0x01, 0x03, 0x11, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x02, 0x01, 0x01, 0x01, 0x01, 0x01, 0x06, 0x02, 0x01, 0x02, 0x01, 0x02, 0x01,
    0x02, 0x01, 0x02, 0x16, 0x01, 0x06, 0x02, 0x01, 0x02, 0x0c, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x02, 0x01, 0x01, 0x01, 0x01, 0x01, 0x06, 0x02, 0x01, 0x02, 0x01, 0x02, 0x01, 0x02, 0x01,
    0x02, 0x16, 0x01, 0x02, 0x04, 0x03, 0x02, 0x31, 0x5e, 0x03, 0x0e, 0x60, 0x1f, 0x01, 0x28, 0x08,
    0x2f, 0x01, 0x81, 0x80, 0xa0, 0x72, 0x9c, 0x02, 0x80, 0xd2, 0x01, 0x80, 0x81, 0x03, 0x03, 0x02,
    0x83, 0x62, 0x04, 0x09, 0x01, 0x80, 0x96, 0xa0, 0x2b, 0xa4, 0xa0, 0x21, 0x5c, 0x81, 0x0e, 0x02,
    0x01, 0x01, 0x01, 0x02, 0x0a, 0x01, 0x01, 0x01, 0x01, 0x02, 0x02, 0x03, 0x44, 0x02, 0x6a, 0x26,
    0x07, 0x0c, 0x05, 0x05, 0x01, 0x01, 0x18, 0x01, 0x05, 0x01, 0x01, 0x01, 0x02, 0x01, 0x02, 0x01,
    0x6c, 0x21, 0x81, 0x6b, 0x12, 0x40, 0x02, 0x36, 0x28, 0x0d, 0x13, 0x0a, 0x16, 0x15, 0x02, 0x0c,
    0x01, 0x13, 0x01, 0x04, 0x04, 0x03, 0x01, 0x01, 0x01, 0x80, 0x87, 0x04, 0x80, 0xbe, 0x03, 0x06,
    0x02, 0x06, 0x02, 0x06, 0x02, 0x03, 0x03, 0x07, 0x01, 0x07, 0x87, 0x92, 0x05, 0x01, 0x2a, 0x01,
    0x09, 0x88, 0xdf, 0x01, 0x01, 0x01, 0x0e, 0x01, 0x80, 0x82, 0x02, 0x82, 0x1b, 0x02, 0x81, 0x6e,
    0x02, 0x01, 0x01, 0x80, 0xfb, 0x02, 0x83, 0x7c, 0x01, 0xa0, 0xb8, 0x25, 0x07, 0x56, 0x06, 0x82,
    0x3f, 0x55, 0x01, 0x47, 0x01, 0x02, 0x02, 0x01, 0x02, 0x02, 0x02, 0x04, 0x01, 0x0c, 0x01, 0x01,
    0x01, 0x07, 0x01, 0x41, 0x01, 0x04, 0x02, 0x08, 0x01, 0x07, 0x01, 0x1c, 0x01, 0x04, 0x01, 0x05,
    0x01, 0x01, 0x03, 0x07, 0x01, 0x81, 0x54, 0x02, 0x81, 0x24, 0x02, 0x32, 0x96, 0x00, 0x04, 0x01,
    0x1b, 0x01, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01, 0x0a, 0x01, 0x04, 0x01, 0x01, 0x01, 0x01, 0x06,
    0x01, 0x04, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x03, 0x01, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02, 0x01, 0x01, 0x02, 0x04, 0x01, 0x07, 0x01,
    0x04, 0x01, 0x04, 0x01, 0x01, 0x01, 0x0a, 0x01, 0x11, 0x05, 0x03, 0x01, 0x05, 0x01, 0x11, 0x82,
    0x44, 0x0b, 0x05, 0x1f, 0x01, 0x20, 0x1a, 0x03, 0x23, 0x01, 0x6f, 0x03, 0x0d, 0x2c, 0x04, 0x09,
    0x07, 0x02, 0x89, 0x9e, 0x0a, 0xa0, 0xfc, 0x06, 0x82, 0x1e,
];

pub static NFKC_QC_NOT_ALLOWED: &[u8] = &[
    0x80, 0xa0, 0x01, 0x07, 0x01, 0x01, 0x01, 0x04, 0x01, 0x02, 0x04, 0x02, 0x03, 0x01, 0x03, 0x73,
    0x02, 0x0b, 0x02, 0x08, 0x01, 0x35, 0x01, 0x44, 0x09, 0x24, 0x03, 0x80, 0xbc, 0x09, 0x1f, 0x06,
    0x02, 0x05, 0x1b, 0x05, 0x01, 0x07, 0x02, 0x01, 0x01, 0x01, 0x01, 0x02, 0x06, 0x01, 0x07, 0x06,
    0x04, 0x02, 0x01, 0x02, 0x06, 0x01, 0x07, 0x06, 0x2e, 0x01, 0x05, 0x01, 0x03, 0x01, 0x05, 0x02,
    0x01, 0x01, 0x48, 0x07, 0x19, 0x03, 0x01, 0x02, 0x03, 0x01, 0x81, 0x8d, 0x01, 0x80, 0xcb, 0x03,
    0x1f, 0x04, 0x82, 0xc3, 0x01, 0x1b, 0x08, 0x5e, 0x01, 0x18, 0x01, 0x04, 0x02, 0x01, 0x01, 0x53,
    0x01, 0x02, 0x01, 0x22, 0x03, 0x02, 0x01, 0x80, 0xdf, 0x01, 0x17, 0x02, 0x04, 0x02, 0x60, 0x01,
    0x18, 0x01, 0x7e, 0x01, 0x6b, 0x01, 0x12, 0x02, 0x67, 0x01, 0x18, 0x01, 0x72, 0x01, 0x04, 0x01,
    0x0f, 0x01, 0x53, 0x01, 0x7f, 0x01, 0x28, 0x02, 0x2e, 0x01, 0x36, 0x01, 0x09, 0x01, 0x04, 0x01,
    0x04, 0x01, 0x04, 0x01, 0x0c, 0x01, 0x09, 0x01, 0x01, 0x05, 0x07, 0x01, 0x11, 0x01, 0x09, 0x01,
    0x04, 0x01, 0x04, 0x01, 0x04, 0x01, 0x0c, 0x01, 0x74, 0x01, 0x80, 0xcd, 0x01, 0x64, 0x15, 0x32,
    0x1b, 0x89, 0x72, 0x01, 0x81, 0xf6, 0x03, 0x01, 0x0b, 0x01, 0x12, 0x01, 0x1c, 0x0d, 0x01, 0x22,
    0x25, 0x80, 0xda, 0x02, 0x80, 0xd5, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x3d, 0x01, 0x01, 0x05, 0x07, 0x01, 0x01, 0x01, 0x01, 0x03, 0x03, 0x01, 0x07,
    0x01, 0x01, 0x03, 0x03, 0x01, 0x07, 0x01, 0x01, 0x03, 0x09, 0x01, 0x01, 0x01, 0x01, 0x02, 0x01,
    0x0b, 0x06, 0x01, 0x05, 0x01, 0x0c, 0x03, 0x08, 0x01, 0x03, 0x02, 0x01, 0x02, 0x04, 0x01, 0x01,
    0x01, 0x08, 0x03, 0x0d, 0x01, 0x07, 0x01, 0x10, 0x02, 0x02, 0x1b, 0x01, 0x0d, 0x0b, 0x01, 0x57,
    0x04, 0x01, 0x03, 0x01, 0x0b, 0x01, 0x02, 0x02, 0x05, 0x02, 0x03, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x04, 0x01, 0x03, 0x01, 0x07, 0x01, 0x06, 0x04, 0x05, 0x06, 0x30, 0x09, 0x01, 0x80,
    0xa2, 0x02, 0x01, 0x02, 0x80, 0xf8, 0x02, 0x81, 0x35, 0x80, 0x8b, 0x85, 0x21, 0x01, 0x67, 0x03,
    0x65, 0x01, 0x81, 0x9f, 0x02, 0x80, 0xf1, 0x01, 0x81, 0x2f, 0x01, 0x53, 0x01, 0x0c, 0x80, 0xd6,
    0x2a, 0x01, 0x35, 0x01, 0x01, 0x03, 0x5e, 0x04, 0x02, 0x01, 0x5f, 0x01, 0x31, 0x5e, 0x03, 0x0e,
    0x60, 0x1f, 0x01, 0x28, 0x08, 0x2f, 0x01, 0x81, 0x80, 0xa0, 0x72, 0x9c, 0x02, 0x80, 0xd2, 0x01,
    0x80, 0x81, 0x03, 0x03, 0x02, 0x83, 0x62, 0x04, 0x09, 0x01, 0xa0, 0x4d, 0x96, 0x81, 0x0e, 0x02,
    0x01, 0x01, 0x01, 0x02, 0x0a, 0x01, 0x01, 0x01, 0x01, 0x02, 0x02, 0x03, 0x44, 0x02, 0x6a, 0x26,
    0x07, 0x0c, 0x05, 0x05, 0x01, 0x01, 0x18, 0x01, 0x05, 0x01, 0x01, 0x01, 0x02, 0x01, 0x02, 0x01,
    0x6c, 0x21, 0x81, 0x6b, 0x12, 0x40, 0x02, 0x36, 0x28, 0x0d, 0x13, 0x0a, 0x16, 0x15, 0x02, 0x0c,
    0x01, 0x13, 0x01, 0x04, 0x04, 0x03, 0x01, 0x01, 0x01, 0x80, 0x87, 0x04, 0x80, 0xbe, 0x03, 0x06,
    0x02, 0x06, 0x02, 0x06, 0x02, 0x03, 0x03, 0x07, 0x01, 0x07, 0x87, 0x92, 0x05, 0x01, 0x2a, 0x01,
    0x09, 0x88, 0xff, 0x01, 0x6c, 0x01, 0x82, 0x16, 0x01, 0x18, 0x01, 0x81, 0x58, 0x01, 0x09, 0x01,
    0x02, 0x01, 0x80, 0xf1, 0x01, 0x83, 0x80, 0x01, 0xa0, 0xb8, 0x2d, 0x07, 0x56, 0x06, 0x82, 0x3f,
    0x55, 0x01, 0x47, 0x01, 0x02, 0x02, 0x01, 0x02, 0x02, 0x02, 0x04, 0x01, 0x0c, 0x01, 0x01, 0x01,
    0x07, 0x01, 0x41, 0x01, 0x04, 0x02, 0x08, 0x01, 0x07, 0x01, 0x1c, 0x01, 0x04, 0x01, 0x05, 0x01,
    0x01, 0x03, 0x07, 0x01, 0x81, 0x54, 0x02, 0x81, 0x24, 0x02, 0x32, 0x96, 0x00, 0x04, 0x01, 0x1b,
    0x01, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01, 0x0a, 0x01, 0x04, 0x01, 0x01, 0x01, 0x01, 0x06, 0x01,
    0x04, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x03, 0x01, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02, 0x01, 0x01, 0x02, 0x04, 0x01, 0x07, 0x01, 0x04,
    0x01, 0x04, 0x01, 0x01, 0x01, 0x0a, 0x01, 0x11, 0x05, 0x03, 0x01, 0x05, 0x01, 0x11, 0x82, 0x44,
    0x0b, 0x05, 0x1f, 0x01, 0x20, 0x1a, 0x03, 0x23, 0x01, 0x6f, 0x03, 0x0d, 0x2c, 0x04, 0x09, 0x07,
    0x02, 0x89, 0x9e, 0x0a, 0xa0, 0xfc, 0x06, 0x82, 0x1e,
];

