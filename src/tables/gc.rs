// gc.rs - Generated by tools/gen_tables.py (UCD 14.0.0). Do not edit.
//
// One compressed interval stream per General_Category value.

pub static GENERAL_CATEGORIES: &[(&str, &[u8])] = &[
    ("cc", &[
        0x00, 0x20, 0x5f, 0x21,
    ]),
    ("cf", &[
        0x80, 0xad, 0x01, 0x85, 0x52, 0x06, 0x16, 0x01, 0x80, 0xc0, 0x01, 0x31, 0x01, 0x81, 0x80, 0x02,
        0x50, 0x01, 0x8f, 0x2b, 0x01, 0x87, 0xfc, 0x05, 0x1a, 0x05, 0x31, 0x05, 0x01, 0x0a, 0xa0, 0xde,
        0x8f, 0x01, 0x80, 0xf9, 0x03, 0x90, 0xc1, 0x01, 0x0f, 0x01, 0xa0, 0x23, 0x62, 0x09, 0xa0, 0x88,
        0x67, 0x04, 0x94, 0xcf, 0x08, 0xac, 0x2e, 0x86, 0x01, 0x1e, 0x60,
    ]),
    ("cn", &[
        0x83, 0x78, 0x02, 0x06, 0x04, 0x07, 0x01, 0x01, 0x01, 0x14, 0x01, 0x81, 0x8d, 0x01, 0x26, 0x02,
        0x32, 0x02, 0x03, 0x01, 0x37, 0x08, 0x1b, 0x04, 0x06, 0x0b, 0x81, 0x0e, 0x01, 0x3c, 0x02, 0x65,
        0x0e, 0x3b, 0x02, 0x31, 0x02, 0x0f, 0x01, 0x1c, 0x02, 0x01, 0x01, 0x0b, 0x05, 0x1f, 0x01, 0x02,
        0x06, 0x80, 0xec, 0x01, 0x08, 0x02, 0x02, 0x02, 0x16, 0x01, 0x07, 0x01, 0x01, 0x03, 0x04, 0x02,
        0x09, 0x02, 0x02, 0x02, 0x04, 0x08, 0x01, 0x04, 0x02, 0x01, 0x05, 0x02, 0x19, 0x02, 0x03, 0x01,
        0x06, 0x04, 0x02, 0x02, 0x16, 0x01, 0x07, 0x01, 0x02, 0x01, 0x02, 0x01, 0x02, 0x02, 0x01, 0x01,
        0x05, 0x04, 0x02, 0x02, 0x03, 0x03, 0x01, 0x07, 0x04, 0x01, 0x01, 0x07, 0x11, 0x0a, 0x03, 0x01,
        0x09, 0x01, 0x03, 0x01, 0x16, 0x01, 0x07, 0x01, 0x02, 0x01, 0x05, 0x02, 0x0a, 0x01, 0x03, 0x01,
        0x03, 0x02, 0x01, 0x0f, 0x04, 0x02, 0x0c, 0x07, 0x07, 0x01, 0x03, 0x01, 0x08, 0x02, 0x02, 0x02,
        0x16, 0x01, 0x07, 0x01, 0x02, 0x01, 0x05, 0x02, 0x09, 0x02, 0x02, 0x02, 0x03, 0x07, 0x03, 0x04,
        0x02, 0x01, 0x05, 0x02, 0x12, 0x0a, 0x02, 0x01, 0x06, 0x03, 0x03, 0x01, 0x04, 0x03, 0x02, 0x01,
        0x01, 0x01, 0x02, 0x03, 0x02, 0x03, 0x03, 0x03, 0x0c, 0x04, 0x05, 0x03, 0x03, 0x01, 0x04, 0x02,
        0x01, 0x06, 0x01, 0x0e, 0x15, 0x05, 0x0d, 0x01, 0x03, 0x01, 0x17, 0x01, 0x10, 0x02, 0x09, 0x01,
        0x03, 0x01, 0x04, 0x07, 0x02, 0x01, 0x03, 0x02, 0x01, 0x02, 0x04, 0x02, 0x0a, 0x07, 0x16, 0x01,
        0x03, 0x01, 0x17, 0x01, 0x0a, 0x01, 0x05, 0x02, 0x09, 0x01, 0x03, 0x01, 0x04, 0x07, 0x02, 0x06,
        0x02, 0x01, 0x04, 0x02, 0x0a, 0x01, 0x02, 0x0d, 0x0d, 0x01, 0x03, 0x01, 0x33, 0x01, 0x03, 0x01,
        0x06, 0x04, 0x10, 0x02, 0x1a, 0x01, 0x03, 0x01, 0x12, 0x03, 0x18, 0x01, 0x09, 0x01, 0x01, 0x02,
        0x07, 0x03, 0x01, 0x04, 0x06, 0x01, 0x01, 0x01, 0x08, 0x06, 0x0a, 0x02, 0x03, 0x0c, 0x3a, 0x04,
        0x1d, 0x25, 0x02, 0x01, 0x01, 0x01, 0x05, 0x01, 0x18, 0x01, 0x01, 0x01, 0x17, 0x02, 0x05, 0x01,
        0x01, 0x01, 0x06, 0x02, 0x0a, 0x02, 0x04, 0x20, 0x48, 0x01, 0x24, 0x04, 0x27, 0x01, 0x24, 0x01,
        0x0f, 0x01, 0x0d, 0x25, 0x80, 0xc6, 0x01, 0x01, 0x05, 0x01, 0x02, 0x81, 0x79, 0x01, 0x04, 0x02,
        0x07, 0x01, 0x01, 0x01, 0x04, 0x02, 0x29, 0x01, 0x04, 0x02, 0x21, 0x01, 0x04, 0x02, 0x07, 0x01,
        0x01, 0x01, 0x04, 0x02, 0x0f, 0x01, 0x39, 0x01, 0x04, 0x02, 0x43, 0x02, 0x20, 0x03, 0x1a, 0x06,
        0x56, 0x02, 0x06, 0x02, 0x82, 0x9d, 0x03, 0x59, 0x07, 0x16, 0x09, 0x18, 0x09, 0x14, 0x0c, 0x0d,
        0x01, 0x03, 0x01, 0x02, 0x0c, 0x5e, 0x02, 0x0a, 0x06, 0x0a, 0x06, 0x1a, 0x06, 0x59, 0x07, 0x2b,
        0x05, 0x46, 0x0a, 0x1f, 0x01, 0x0c, 0x04, 0x0c, 0x04, 0x01, 0x03, 0x2a, 0x02, 0x05, 0x0b, 0x2c,
        0x04, 0x1a, 0x06, 0x0b, 0x03, 0x3e, 0x02, 0x41, 0x01, 0x1d, 0x02, 0x0b, 0x06, 0x0a, 0x06, 0x0e,
        0x02, 0x1f, 0x31, 0x4d, 0x03, 0x2f, 0x01, 0x74, 0x08, 0x3c, 0x03, 0x0f, 0x03, 0x3c, 0x07, 0x2b,
        0x02, 0x0b, 0x08, 0x2b, 0x05, 0x82, 0x16, 0x02, 0x06, 0x02, 0x26, 0x02, 0x06, 0x02, 0x08, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x1f, 0x02, 0x35, 0x01, 0x0f, 0x01, 0x0e, 0x02, 0x06, 0x01,
        0x13, 0x02, 0x03, 0x01, 0x09, 0x01, 0x65, 0x01, 0x0c, 0x02, 0x1b, 0x01, 0x0d, 0x03, 0x21, 0x0f,
        0x21, 0x0f, 0x80, 0x8c, 0x04, 0x82, 0x97, 0x19, 0x0b, 0x15, 0x87, 0x14, 0x02, 0x20, 0x01, 0x81,
        0x5d, 0x05, 0x2d, 0x01, 0x01, 0x05, 0x01, 0x02, 0x38, 0x07, 0x02, 0x0e, 0x18, 0x09, 0x07, 0x01,
        0x07, 0x01, 0x07, 0x01, 0x07, 0x01, 0x07, 0x01, 0x07, 0x01, 0x07, 0x01, 0x07, 0x01, 0x7e, 0x22,
        0x1a, 0x01, 0x59, 0x0c, 0x80, 0xd6, 0x1a, 0x0c, 0x04, 0x40, 0x01, 0x56, 0x02, 0x67, 0x05, 0x2b,
        0x01, 0x5e, 0x01, 0x54, 0x0c, 0x2f, 0x01, 0xa0, 0x72, 0x6d, 0x03, 0x37, 0x09, 0x81, 0x5c, 0x14,
        0x80, 0xb8, 0x08, 0x80, 0xcb, 0x05, 0x02, 0x01, 0x01, 0x01, 0x05, 0x18, 0x3b, 0x03, 0x0a, 0x06,
        0x38, 0x08, 0x46, 0x08, 0x0c, 0x06, 0x74, 0x0b, 0x1e, 0x03, 0x4e, 0x01, 0x0b, 0x04, 0x21, 0x01,
        0x37, 0x09, 0x0e, 0x02, 0x0a, 0x02, 0x67, 0x18, 0x1c, 0x0a, 0x06, 0x02, 0x06, 0x02, 0x06, 0x09,
        0x07, 0x01, 0x07, 0x01, 0x3c, 0x04, 0x7e, 0x02, 0x0a, 0x06, 0xa0, 0x2b, 0xa4, 0x0c, 0x17, 0x04,
        0x31, 0x04, 0xa0, 0x22, 0x6e, 0x02, 0x6a, 0x26, 0x07, 0x0c, 0x05, 0x05, 0x1a, 0x01, 0x05, 0x01,
        0x01, 0x01, 0x02, 0x01, 0x02, 0x01, 0x7d, 0x10, 0x81, 0xbd, 0x02, 0x36, 0x07, 0x01, 0x20, 0x2a,
        0x06, 0x33, 0x01, 0x13, 0x01, 0x04, 0x04, 0x05, 0x01, 0x80, 0x87, 0x02, 0x01, 0x01, 0x80, 0xbe,
        0x03, 0x06, 0x02, 0x06, 0x02, 0x06, 0x02, 0x03, 0x03, 0x07, 0x01, 0x07, 0x0a, 0x05, 0x02, 0x0c,
        0x01, 0x1a, 0x01, 0x13, 0x01, 0x02, 0x01, 0x0f, 0x02, 0x0e, 0x22, 0x7b, 0x05, 0x03, 0x04, 0x2d,
        0x03, 0x58, 0x01, 0x0d, 0x03, 0x01, 0x2f, 0x2e, 0x80, 0x82, 0x1d, 0x03, 0x31, 0x0f, 0x1c, 0x04,
        0x24, 0x09, 0x1e, 0x05, 0x2b, 0x05, 0x1e, 0x01, 0x25, 0x04, 0x0e, 0x2a, 0x80, 0x9e, 0x02, 0x0a,
        0x06, 0x24, 0x04, 0x24, 0x04, 0x28, 0x08, 0x34, 0x0b, 0x0c, 0x01, 0x0f, 0x01, 0x07, 0x01, 0x02,
        0x01, 0x0b, 0x01, 0x0f, 0x01, 0x07, 0x01, 0x02, 0x43, 0x81, 0x37, 0x09, 0x16, 0x0a, 0x08, 0x18,
        0x06, 0x01, 0x2a, 0x01, 0x09, 0x45, 0x06, 0x02, 0x01, 0x01, 0x2c, 0x01, 0x02, 0x03, 0x01, 0x02,
        0x17, 0x01, 0x48, 0x08, 0x09, 0x30, 0x13, 0x01, 0x02, 0x05, 0x21, 0x03, 0x1b, 0x05, 0x01, 0x40,
        0x38, 0x04, 0x14, 0x02, 0x32, 0x01, 0x02, 0x05, 0x08, 0x01, 0x03, 0x01, 0x1d, 0x02, 0x03, 0x04,
        0x0a, 0x07, 0x09, 0x07, 0x40, 0x20, 0x27, 0x04, 0x0c, 0x09, 0x36, 0x03, 0x1d, 0x02, 0x1b, 0x05,
        0x1a, 0x07, 0x04, 0x0c, 0x07, 0x50, 0x49, 0x37, 0x33, 0x0d, 0x33, 0x07, 0x2e, 0x08, 0x0a, 0x81,
        0x26, 0x1f, 0x01, 0x2a, 0x01, 0x03, 0x02, 0x02, 0x4e, 0x28, 0x08, 0x2a, 0x16, 0x1a, 0x26, 0x1c,
        0x14, 0x17, 0x09, 0x4e, 0x04, 0x24, 0x09, 0x44, 0x0a, 0x01, 0x02, 0x19, 0x07, 0x0a, 0x06, 0x35,
        0x01, 0x12, 0x08, 0x27, 0x09, 0x60, 0x01, 0x14, 0x0b, 0x12, 0x01, 0x2c, 0x41, 0x07, 0x01, 0x01,
        0x01, 0x04, 0x01, 0x0f, 0x01, 0x0b, 0x06, 0x3b, 0x05, 0x0a, 0x06, 0x04, 0x01, 0x08, 0x02, 0x02,
        0x02, 0x16, 0x01, 0x07, 0x01, 0x02, 0x01, 0x05, 0x01, 0x0a, 0x02, 0x02, 0x02, 0x03, 0x02, 0x01,
        0x06, 0x01, 0x05, 0x07, 0x02, 0x07, 0x03, 0x05, 0x80, 0x8b, 0x5c, 0x01, 0x05, 0x1e, 0x48, 0x08,
        0x0a, 0x80, 0xa6, 0x36, 0x02, 0x26, 0x22, 0x45, 0x0b, 0x0a, 0x06, 0x0d, 0x13, 0x3a, 0x06, 0x0a,
        0x36, 0x1b, 0x02, 0x0f, 0x04, 0x17, 0x80, 0xb9, 0x3c, 0x64, 0x53, 0x0c, 0x08, 0x02, 0x01, 0x02,
        0x08, 0x01, 0x02, 0x01, 0x1e, 0x01, 0x02, 0x02, 0x0c, 0x09, 0x0a, 0x46, 0x08, 0x02, 0x2e, 0x02,
        0x0b, 0x1b, 0x48, 0x08, 0x53, 0x0d, 0x49, 0x81, 0x07, 0x09, 0x01, 0x2d, 0x01, 0x0e, 0x0a, 0x1d,
        0x03, 0x20, 0x02, 0x16, 0x01, 0x0e, 0x49, 0x07, 0x01, 0x02, 0x01, 0x2c, 0x03, 0x01, 0x01, 0x02,
        0x01, 0x09, 0x08, 0x0a, 0x06, 0x06, 0x01, 0x02, 0x01, 0x25, 0x01, 0x02, 0x01, 0x06, 0x07, 0x0a,
        0x81, 0x36, 0x19, 0x80, 0xb7, 0x01, 0x0f, 0x32, 0x0d, 0x83, 0x9b, 0x66, 0x6f, 0x01, 0x05, 0x0b,
        0x80, 0xc4, 0x8a, 0x4c, 0x63, 0x0d, 0x84, 0x2f, 0x01, 0x09, 0x8f, 0xc7, 0x82, 0x47, 0xa0, 0x21,
        0xb9, 0x82, 0x39, 0x07, 0x1f, 0x01, 0x0a, 0x04, 0x51, 0x01, 0x0a, 0x06, 0x1e, 0x02, 0x06, 0x0a,
        0x46, 0x0a, 0x0a, 0x01, 0x07, 0x01, 0x15, 0x05, 0x13, 0x82, 0xb0, 0x5b, 0x65, 0x4b, 0x04, 0x39,
        0x07, 0x11, 0x40, 0x05, 0x0b, 0x02, 0x0e, 0x97, 0xf8, 0x08, 0x84, 0xd6, 0x2a, 0x09, 0xa0, 0x22,
        0xe7, 0x04, 0x01, 0x07, 0x01, 0x02, 0x01, 0x81, 0x23, 0x2d, 0x03, 0x11, 0x04, 0x08, 0x81, 0x8c,
        0x89, 0x04, 0x6b, 0x05, 0x0d, 0x03, 0x09, 0x07, 0x0a, 0x02, 0x08, 0x92, 0x5c, 0x2e, 0x02, 0x17,
        0x09, 0x74, 0x3c, 0x80, 0xf6, 0x0a, 0x27, 0x02, 0x80, 0xc2, 0x15, 0x46, 0x80, 0x9a, 0x14, 0x0c,
        0x57, 0x09, 0x19, 0x80, 0x87, 0x55, 0x01, 0x47, 0x01, 0x02, 0x02, 0x01, 0x02, 0x02, 0x02, 0x04,
        0x01, 0x0c, 0x01, 0x01, 0x01, 0x07, 0x01, 0x41, 0x01, 0x04, 0x02, 0x08, 0x01, 0x07, 0x01, 0x1c,
        0x01, 0x04, 0x01, 0x05, 0x01, 0x01, 0x03, 0x07, 0x01, 0x81, 0x54, 0x02, 0x81, 0x24, 0x02, 0x82,
        0xbe, 0x0f, 0x05, 0x01, 0x0f, 0x84, 0x50, 0x1f, 0x80, 0xe1, 0x07, 0x01, 0x11, 0x02, 0x07, 0x01,
        0x02, 0x01, 0x05, 0x80, 0xd5, 0x2d, 0x03, 0x0e, 0x02, 0x0a, 0x04, 0x02, 0x81, 0x40, 0x1f, 0x11,
        0x3a, 0x05, 0x01, 0x84, 0xe0, 0x07, 0x01, 0x04, 0x01, 0x02, 0x01, 0x0f, 0x01, 0x80, 0xc5, 0x02,
        0x10, 0x29, 0x4c, 0x04, 0x0a, 0x04, 0x02, 0x83, 0x11, 0x44, 0x4c, 0x3d, 0x80, 0xc2, 0x04, 0x01,
        0x1b, 0x01, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01, 0x0a, 0x01, 0x04, 0x01, 0x01, 0x01, 0x01, 0x06,
        0x01, 0x04, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x03, 0x01, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02, 0x01, 0x01, 0x02, 0x04, 0x01, 0x07, 0x01,
        0x04, 0x01, 0x04, 0x01, 0x01, 0x01, 0x0a, 0x01, 0x11, 0x05, 0x03, 0x01, 0x05, 0x01, 0x11, 0x34,
        0x02, 0x81, 0x0e, 0x2c, 0x04, 0x64, 0x0c, 0x0f, 0x02, 0x0f, 0x01, 0x0f, 0x01, 0x25, 0x0a, 0x80,
        0xae, 0x38, 0x1d, 0x0d, 0x2c, 0x04, 0x09, 0x07, 0x02, 0x0e, 0x06, 0x80, 0x9a, 0x83, 0xd8, 0x05,
        0x10, 0x03, 0x0d, 0x03, 0x74, 0x0c, 0x59, 0x07, 0x0c, 0x04, 0x01, 0x0f, 0x0c, 0x04, 0x38, 0x08,
        0x0a, 0x06, 0x28, 0x08, 0x1e, 0x02, 0x02, 0x4e, 0x81, 0x54, 0x0c, 0x0e, 0x02, 0x05, 0x03, 0x05,
        0x03, 0x07, 0x09, 0x1d, 0x03, 0x0b, 0x05, 0x06, 0x0a, 0x0a, 0x06, 0x08, 0x08, 0x07, 0x09, 0x80,
        0x93, 0x01, 0x37, 0x25, 0x0a, 0x84, 0x06, 0xa0, 0xa6, 0xe0, 0x20, 0x90, 0x39, 0x07, 0x80, 0xde,
        0x02, 0x96, 0x82, 0x0e, 0x9d, 0x31, 0x8c, 0x1f, 0x82, 0x1e, 0x85, 0xe2, 0x93, 0x4b, 0xaa, 0xec,
        0xb6, 0x01, 0x1e, 0x60, 0x80, 0x80, 0x80, 0xf0, 0xa0, 0xfe, 0x10, 0xa0, 0xff, 0xfe, 0x02, 0xa0,
        0xff, 0xfe,
    ]),
    ("co", &[
        0xa0, 0xe0, 0x00, 0x99, 0x00, 0xae, 0x07, 0x00, 0xa0, 0xff, 0xfe, 0x02, 0xa0, 0xff, 0xfe,
    ]),
    ("cs", &[
        0xa0, 0xd8, 0x00, 0x88, 0x00,
    ]),
    ("ll", &[
        0x61, 0x1a, 0x3a, 0x01, 0x29, 0x18, 0x01, 0x08, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02, 0x01,
        0x01, 0x01, 0x01, 0x03, 0x02, 0x01, 0x01, 0x01, 0x02, 0x01, 0x03, 0x02, 0x04, 0x01, 0x02, 0x01,
        0x03, 0x03, 0x02, 0x01, 0x02, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01,
        0x02, 0x01, 0x03, 0x01, 0x01, 0x01, 0x02, 0x02, 0x02, 0x03, 0x06, 0x01, 0x02, 0x01, 0x02, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x02, 0x02, 0x01, 0x01, 0x01, 0x03, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x07, 0x02, 0x01, 0x02, 0x02, 0x01, 0x01, 0x04, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x45, 0x01, 0x1b, 0x80, 0xc1, 0x01, 0x01, 0x01, 0x03, 0x01, 0x03, 0x03, 0x12, 0x01, 0x1b,
        0x23, 0x01, 0x02, 0x03, 0x03, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x05, 0x01, 0x01, 0x02,
        0x01, 0x02, 0x02, 0x33, 0x30, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x09, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x30, 0x29, 0x8b, 0x47, 0x2b,
        0x02, 0x03, 0x82, 0xf8, 0x06, 0x88, 0x82, 0x09, 0x77, 0x2c, 0x3f, 0x0d, 0x01, 0x22, 0x66, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x09, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x09, 0x08, 0x06, 0x0a, 0x08, 0x08, 0x08, 0x08, 0x06, 0x0a, 0x08,
        0x08, 0x08, 0x08, 0x0e, 0x02, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x05, 0x01, 0x02, 0x06, 0x01,
        0x03, 0x03, 0x01, 0x02, 0x08, 0x04, 0x02, 0x02, 0x08, 0x08, 0x0a, 0x03, 0x01, 0x02, 0x81, 0x12,
        0x01, 0x03, 0x02, 0x03, 0x01, 0x1b, 0x01, 0x04, 0x01, 0x04, 0x01, 0x02, 0x02, 0x08, 0x04, 0x04,
        0x01, 0x35, 0x01, 0x8a, 0xab, 0x30, 0x01, 0x01, 0x03, 0x02, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x04, 0x01, 0x01, 0x02, 0x01, 0x06, 0x05, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02, 0x07, 0x01, 0x01, 0x01, 0x04, 0x01,
        0x0c, 0x26, 0x01, 0x01, 0x05, 0x01, 0xa0, 0x79, 0x13, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x13, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x80, 0x87, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x03, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x08, 0x01, 0x01, 0x01, 0x01, 0x02, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x04,
        0x01, 0x01, 0x01, 0x02, 0x01, 0x01, 0x03, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x05, 0x01, 0x05, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x04, 0x01, 0x01,
        0x01, 0x06, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x1c, 0x01, 0x03, 0x01, 0x83,
        0x35, 0x2b, 0x05, 0x09, 0x07, 0x50, 0xa0, 0x4f, 0x40, 0x07, 0x0c, 0x05, 0x84, 0x29, 0x1a, 0x84,
        0xcd, 0x28, 0x80, 0x88, 0x24, 0x80, 0x9b, 0x0b, 0x01, 0x0f, 0x01, 0x07, 0x01, 0x02, 0x87, 0x03,
        0x33, 0x8b, 0xcd, 0x20, 0xa0, 0x55, 0x80, 0x20, 0xa0, 0x65, 0x9a, 0x1a, 0x1a, 0x07, 0x01, 0x12,
        0x1a, 0x1a, 0x1a, 0x04, 0x01, 0x01, 0x01, 0x07, 0x01, 0x0b, 0x1a, 0x1a, 0x1a, 0x1a, 0x1a, 0x1a,
        0x1a, 0x1a, 0x1a, 0x1a, 0x1a, 0x1a, 0x1a, 0x1a, 0x1a, 0x1a, 0x1a, 0x1c, 0x1c, 0x19, 0x01, 0x06,
        0x1a, 0x19, 0x01, 0x06, 0x1a, 0x19, 0x01, 0x06, 0x1a, 0x19, 0x01, 0x06, 0x1a, 0x19, 0x01, 0x06,
        0x01, 0x01, 0x87, 0x34, 0x0a, 0x01, 0x14, 0x8a, 0x03, 0x22,
    ]),
    ("lm", &[
        0x82, 0xb0, 0x12, 0x04, 0x0c, 0x0e, 0x05, 0x07, 0x01, 0x01, 0x01, 0x80, 0x85, 0x01, 0x05, 0x01,
        0x81, 0xde, 0x01, 0x80, 0xe6, 0x01, 0x80, 0xa4, 0x02, 0x81, 0x0d, 0x02, 0x04, 0x01, 0x1f, 0x01,
        0x09, 0x01, 0x03, 0x01, 0x80, 0xa0, 0x01, 0x80, 0xa7, 0x01, 0x84, 0xd4, 0x01, 0x7f, 0x01, 0x82,
        0x35, 0x01, 0x86, 0xda, 0x01, 0x6b, 0x01, 0x82, 0x63, 0x01, 0x81, 0xd0, 0x06, 0x80, 0xae, 0x3f,
        0x0d, 0x01, 0x22, 0x25, 0x82, 0xb1, 0x01, 0x0d, 0x01, 0x10, 0x0d, 0x8b, 0xdf, 0x02, 0x80, 0xf1,
        0x01, 0x80, 0xbf, 0x01, 0x81, 0xd5, 0x01, 0x2b, 0x05, 0x05, 0x01, 0x61, 0x02, 0x5d, 0x03, 0xa0,
        0x6f, 0x16, 0x01, 0x84, 0xe2, 0x06, 0x81, 0x0e, 0x01, 0x72, 0x01, 0x1c, 0x02, 0x79, 0x09, 0x50,
        0x01, 0x17, 0x01, 0x69, 0x03, 0x03, 0x02, 0x81, 0xd5, 0x01, 0x16, 0x01, 0x80, 0x89, 0x01, 0x6c,
        0x01, 0x15, 0x02, 0x67, 0x04, 0x09, 0x01, 0xa0, 0x54, 0x06, 0x01, 0x2d, 0x02, 0x87, 0xe0, 0x06,
        0x01, 0x2a, 0x01, 0x09, 0xa0, 0x63, 0x85, 0x04, 0x84, 0x4f, 0x0d, 0x40, 0x02, 0x01, 0x01, 0xa0,
        0x40, 0x0c, 0x04, 0x01, 0x07, 0x01, 0x02, 0xa0, 0x31, 0x38, 0x07, 0x88, 0x0d, 0x01,
    ]),
    ("lo", &[
        0x80, 0xaa, 0x01, 0x0f, 0x01, 0x81, 0x00, 0x01, 0x04, 0x04, 0x80, 0xd0, 0x01, 0x83, 0x3b, 0x1b,
        0x04, 0x04, 0x2d, 0x20, 0x01, 0x0a, 0x23, 0x02, 0x01, 0x63, 0x01, 0x01, 0x18, 0x02, 0x0a, 0x03,
        0x02, 0x01, 0x10, 0x01, 0x01, 0x1e, 0x1d, 0x59, 0x0b, 0x01, 0x18, 0x21, 0x15, 0x16, 0x2a, 0x19,
        0x07, 0x0b, 0x05, 0x18, 0x01, 0x06, 0x11, 0x29, 0x3b, 0x36, 0x03, 0x01, 0x12, 0x01, 0x07, 0x0a,
        0x10, 0x0f, 0x04, 0x08, 0x02, 0x02, 0x02, 0x16, 0x01, 0x07, 0x01, 0x01, 0x03, 0x04, 0x03, 0x01,
        0x10, 0x01, 0x0d, 0x02, 0x01, 0x03, 0x0e, 0x02, 0x0a, 0x01, 0x08, 0x06, 0x04, 0x02, 0x02, 0x16,
        0x01, 0x07, 0x01, 0x02, 0x01, 0x02, 0x01, 0x02, 0x1f, 0x04, 0x01, 0x01, 0x13, 0x03, 0x10, 0x09,
        0x01, 0x03, 0x01, 0x16, 0x01, 0x07, 0x01, 0x02, 0x01, 0x05, 0x03, 0x01, 0x12, 0x01, 0x0f, 0x02,
        0x17, 0x01, 0x0b, 0x08, 0x02, 0x02, 0x02, 0x16, 0x01, 0x07, 0x01, 0x02, 0x01, 0x05, 0x03, 0x01,
        0x1e, 0x02, 0x01, 0x03, 0x0f, 0x01, 0x11, 0x01, 0x01, 0x06, 0x03, 0x03, 0x01, 0x04, 0x03, 0x02,
        0x01, 0x01, 0x01, 0x02, 0x03, 0x02, 0x03, 0x03, 0x03, 0x0c, 0x16, 0x01, 0x34, 0x08, 0x01, 0x03,
        0x01, 0x17, 0x01, 0x10, 0x03, 0x01, 0x1a, 0x03, 0x02, 0x01, 0x02, 0x02, 0x1e, 0x01, 0x04, 0x08,
        0x01, 0x03, 0x01, 0x17, 0x01, 0x0a, 0x01, 0x05, 0x03, 0x01, 0x1f, 0x02, 0x01, 0x02, 0x0f, 0x02,
        0x11, 0x09, 0x01, 0x03, 0x01, 0x29, 0x02, 0x01, 0x10, 0x01, 0x05, 0x03, 0x08, 0x03, 0x18, 0x06,
        0x05, 0x12, 0x03, 0x18, 0x01, 0x09, 0x01, 0x01, 0x02, 0x07, 0x3a, 0x30, 0x01, 0x02, 0x0c, 0x06,
        0x3b, 0x02, 0x01, 0x01, 0x01, 0x05, 0x01, 0x18, 0x01, 0x01, 0x01, 0x0a, 0x01, 0x02, 0x09, 0x01,
        0x02, 0x05, 0x17, 0x04, 0x20, 0x01, 0x3f, 0x08, 0x01, 0x24, 0x1b, 0x05, 0x73, 0x2b, 0x14, 0x01,
        0x10, 0x06, 0x04, 0x04, 0x03, 0x01, 0x03, 0x02, 0x07, 0x03, 0x04, 0x0d, 0x0c, 0x01, 0x71, 0x81,
        0x49, 0x01, 0x04, 0x02, 0x07, 0x01, 0x01, 0x01, 0x04, 0x02, 0x29, 0x01, 0x04, 0x02, 0x21, 0x01,
        0x04, 0x02, 0x07, 0x01, 0x01, 0x01, 0x04, 0x02, 0x0f, 0x01, 0x39, 0x01, 0x04, 0x02, 0x43, 0x25,
        0x10, 0x71, 0x82, 0x6c, 0x02, 0x11, 0x01, 0x1a, 0x05, 0x4b, 0x06, 0x08, 0x07, 0x12, 0x0d, 0x13,
        0x0e, 0x12, 0x0e, 0x0d, 0x01, 0x03, 0x0f, 0x34, 0x28, 0x01, 0x43, 0x23, 0x01, 0x35, 0x07, 0x05,
        0x02, 0x22, 0x01, 0x01, 0x05, 0x46, 0x0a, 0x1f, 0x31, 0x1e, 0x02, 0x05, 0x0b, 0x2c, 0x04, 0x1a,
        0x36, 0x17, 0x09, 0x35, 0x80, 0xb0, 0x2f, 0x11, 0x08, 0x36, 0x1e, 0x0d, 0x02, 0x0a, 0x2c, 0x1a,
        0x24, 0x29, 0x03, 0x0a, 0x1e, 0x71, 0x04, 0x01, 0x06, 0x01, 0x02, 0x03, 0x01, 0x84, 0x3a, 0x04,
        0x8b, 0xf7, 0x38, 0x18, 0x17, 0x09, 0x07, 0x01, 0x07, 0x01, 0x07, 0x01, 0x07, 0x01, 0x07, 0x01,
        0x07, 0x01, 0x07, 0x01, 0x07, 0x82, 0x27, 0x01, 0x35, 0x01, 0x04, 0x56, 0x08, 0x01, 0x01, 0x5a,
        0x04, 0x01, 0x05, 0x2b, 0x01, 0x5e, 0x11, 0x20, 0x30, 0x10, 0x82, 0x00, 0x99, 0xc0, 0x40, 0xa0,
        0x52, 0x15, 0x01, 0x84, 0x77, 0x43, 0x28, 0x08, 0x81, 0x0c, 0x04, 0x10, 0x0a, 0x02, 0x42, 0x01,
        0x31, 0x46, 0x80, 0xa9, 0x01, 0x67, 0x01, 0x03, 0x07, 0x01, 0x03, 0x01, 0x04, 0x01, 0x17, 0x1d,
        0x34, 0x0e, 0x32, 0x3e, 0x06, 0x03, 0x01, 0x01, 0x02, 0x0b, 0x1c, 0x0a, 0x17, 0x19, 0x1d, 0x07,
        0x2f, 0x2d, 0x05, 0x02, 0x09, 0x0a, 0x05, 0x01, 0x29, 0x17, 0x03, 0x01, 0x08, 0x14, 0x10, 0x01,
        0x06, 0x03, 0x01, 0x03, 0x32, 0x01, 0x01, 0x03, 0x02, 0x02, 0x05, 0x02, 0x01, 0x01, 0x01, 0x18,
        0x02, 0x03, 0x0b, 0x07, 0x01, 0x0e, 0x06, 0x02, 0x06, 0x02, 0x06, 0x09, 0x07, 0x01, 0x07, 0x80,
        0x91, 0x23, 0x1d, 0xa0, 0x2b, 0xa4, 0x0c, 0x17, 0x04, 0x31, 0xa0, 0x21, 0x04, 0x81, 0x6e, 0x02,
        0x6a, 0x43, 0x01, 0x01, 0x0a, 0x01, 0x0d, 0x01, 0x05, 0x01, 0x01, 0x01, 0x02, 0x01, 0x02, 0x01,
        0x6c, 0x21, 0x81, 0x6b, 0x12, 0x40, 0x02, 0x36, 0x28, 0x0c, 0x74, 0x05, 0x01, 0x80, 0x87, 0x69,
        0x0a, 0x01, 0x2d, 0x02, 0x1f, 0x03, 0x06, 0x02, 0x06, 0x02, 0x06, 0x02, 0x03, 0x23, 0x0c, 0x01,
        0x1a, 0x01, 0x13, 0x01, 0x02, 0x01, 0x0f, 0x02, 0x0e, 0x22, 0x7b, 0x81, 0x85, 0x1d, 0x03, 0x31,
        0x2f, 0x20, 0x0d, 0x14, 0x01, 0x08, 0x06, 0x26, 0x0a, 0x1e, 0x02, 0x24, 0x04, 0x08, 0x80, 0x80,
        0x4e, 0x62, 0x28, 0x08, 0x34, 0x80, 0x9c, 0x81, 0x37, 0x09, 0x16, 0x0a, 0x08, 0x80, 0x98, 0x06,
        0x02, 0x01, 0x01, 0x2c, 0x01, 0x02, 0x03, 0x01, 0x02, 0x17, 0x0a, 0x17, 0x09, 0x1f, 0x41, 0x13,
        0x01, 0x02, 0x0a, 0x16, 0x0a, 0x1a, 0x46, 0x38, 0x06, 0x02, 0x40, 0x01, 0x0f, 0x04, 0x01, 0x03,
        0x01, 0x1d, 0x2a, 0x1d, 0x03, 0x1d, 0x23, 0x08, 0x01, 0x1c, 0x1b, 0x36, 0x0a, 0x16, 0x0a, 0x13,
        0x0d, 0x12, 0x6e, 0x49, 0x80, 0xb7, 0x24, 0x81, 0x5c, 0x2a, 0x06, 0x02, 0x4e, 0x1d, 0x0a, 0x01,
        0x08, 0x16, 0x2a, 0x12, 0x2e, 0x15, 0x1b, 0x17, 0x0c, 0x35, 0x39, 0x02, 0x02, 0x01, 0x0d, 0x2d,
        0x20, 0x19, 0x1a, 0x24, 0x1d, 0x01, 0x02, 0x01, 0x08, 0x23, 0x03, 0x01, 0x0c, 0x30, 0x0e, 0x04,
        0x15, 0x01, 0x01, 0x01, 0x23, 0x12, 0x01, 0x19, 0x54, 0x07, 0x01, 0x01, 0x01, 0x04, 0x01, 0x0f,
        0x01, 0x0a, 0x07, 0x2f, 0x26, 0x08, 0x02, 0x02, 0x02, 0x16, 0x01, 0x07, 0x01, 0x02, 0x01, 0x05,
        0x03, 0x01, 0x12, 0x01, 0x0c, 0x05, 0x80, 0x9e, 0x35, 0x12, 0x04, 0x14, 0x03, 0x1e, 0x30, 0x14,
        0x02, 0x01, 0x01, 0x80, 0xb8, 0x2f, 0x29, 0x04, 0x24, 0x30, 0x14, 0x01, 0x3b, 0x2b, 0x0d, 0x01,
        0x47, 0x1b, 0x25, 0x07, 0x80, 0xb9, 0x2c, 0x80, 0xd3, 0x08, 0x02, 0x01, 0x02, 0x08, 0x01, 0x02,
        0x01, 0x18, 0x0f, 0x01, 0x01, 0x01, 0x5e, 0x08, 0x02, 0x27, 0x10, 0x01, 0x01, 0x01, 0x1c, 0x01,
        0x0a, 0x28, 0x07, 0x01, 0x15, 0x01, 0x0b, 0x2e, 0x13, 0x01, 0x12, 0x49, 0x81, 0x07, 0x09, 0x01,
        0x25, 0x11, 0x01, 0x31, 0x1e, 0x70, 0x07, 0x01, 0x02, 0x01, 0x26, 0x15, 0x01, 0x19, 0x06, 0x01,
        0x02, 0x01, 0x20, 0x0e, 0x01, 0x81, 0x47, 0x13, 0x80, 0xbd, 0x01, 0x4f, 0x83, 0x9a, 0x80, 0xe6,
        0x80, 0xc4, 0x8a, 0x4c, 0x61, 0x0f, 0x84, 0x2f, 0x8f, 0xd1, 0x82, 0x47, 0xa0, 0x21, 0xb9, 0x82,
        0x39, 0x07, 0x1f, 0x11, 0x4f, 0x11, 0x1e, 0x12, 0x30, 0x33, 0x15, 0x05, 0x13, 0x83, 0x70, 0x4b,
        0x05, 0x01, 0x80, 0xaf, 0x97, 0xf8, 0x08, 0x84, 0xd6, 0x2a, 0x09, 0xa0, 0x22, 0xf7, 0x81, 0x23,
        0x2d, 0x03, 0x11, 0x04, 0x08, 0x81, 0x8c, 0x89, 0x04, 0x6b, 0x05, 0x0d, 0x03, 0x09, 0x07, 0x0a,
        0xa0, 0x22, 0x70, 0x01, 0x81, 0xf5, 0x2d, 0x21, 0x01, 0x81, 0x41, 0x1e, 0x12, 0x2c, 0x84, 0xf4,
        0x07, 0x01, 0x04, 0x01, 0x02, 0x01, 0x0f, 0x01, 0x80, 0xc5, 0x85, 0x3b, 0x04, 0x01, 0x1b, 0x01,
        0x02, 0x01, 0x01, 0x02, 0x01, 0x01, 0x0a, 0x01, 0x04, 0x01, 0x01, 0x01, 0x01, 0x06, 0x01, 0x04,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x03, 0x01, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02, 0x01, 0x01, 0x02, 0x04, 0x01, 0x07, 0x01, 0x04, 0x01,
        0x04, 0x01, 0x01, 0x01, 0x0a, 0x01, 0x11, 0x05, 0x03, 0x01, 0x05, 0x01, 0x11, 0x91, 0x44, 0xa0,
        0xa6, 0xe0, 0x20, 0x90, 0x39, 0x07, 0x80, 0xde, 0x02, 0x96, 0x82, 0x0e, 0x9d, 0x31, 0x8c, 0x1f,
        0x82, 0x1e, 0x85, 0xe2, 0x93, 0x4b,
    ]),
    ("lt", &[
        0x81, 0xc5, 0x01, 0x02, 0x01, 0x02, 0x01, 0x26, 0x01, 0x9d, 0x95, 0x08, 0x08, 0x08, 0x08, 0x08,
        0x0c, 0x01, 0x0f, 0x01, 0x2f, 0x01,
    ]),
    ("lu", &[
        0x41, 0x1a, 0x65, 0x17, 0x01, 0x07, 0x21, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02, 0x01, 0x01,
        0x01, 0x01, 0x03, 0x02, 0x01, 0x01, 0x01, 0x02, 0x01, 0x03, 0x02, 0x04, 0x01, 0x02, 0x01, 0x03,
        0x03, 0x02, 0x01, 0x02, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01, 0x02,
        0x01, 0x03, 0x01, 0x01, 0x01, 0x02, 0x03, 0x01, 0x07, 0x01, 0x02, 0x01, 0x02, 0x01, 0x02, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x02, 0x01, 0x02, 0x01, 0x01, 0x03, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x07, 0x02, 0x01, 0x02, 0x02, 0x01, 0x01, 0x04, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x81, 0x21, 0x01, 0x01, 0x01, 0x03, 0x01, 0x08, 0x01, 0x06, 0x01, 0x01, 0x03, 0x01, 0x01, 0x01,
        0x02, 0x01, 0x11, 0x01, 0x09, 0x23, 0x01, 0x02, 0x03, 0x03, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x05, 0x01, 0x02, 0x01, 0x01, 0x02, 0x02, 0x33, 0x30, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x09, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x02, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02,
        0x26, 0x8b, 0x49, 0x26, 0x01, 0x01, 0x05, 0x01, 0x82, 0xd2, 0x56, 0x88, 0x9a, 0x2b, 0x02, 0x03,
        0x81, 0x40, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x09, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x09, 0x08, 0x08, 0x06, 0x0a, 0x08, 0x08,
        0x08, 0x08, 0x06, 0x0b, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x08, 0x08, 0x48, 0x04, 0x0c,
        0x04, 0x0c, 0x04, 0x0c, 0x05, 0x0b, 0x04, 0x81, 0x06, 0x01, 0x04, 0x01, 0x03, 0x03, 0x02, 0x03,
        0x02, 0x01, 0x03, 0x05, 0x06, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x04, 0x02, 0x04, 0x0a, 0x02,
        0x05, 0x01, 0x3d, 0x01, 0x8a, 0x7c, 0x30, 0x30, 0x01, 0x01, 0x03, 0x02, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x04, 0x01, 0x01, 0x02, 0x01, 0x08, 0x03, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x08, 0x01, 0x01, 0x01, 0x04,
        0x01, 0xa0, 0x79, 0x4d, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x13, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x80, 0x87, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x03, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x0a, 0x01, 0x01, 0x01, 0x01, 0x02,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x04, 0x01, 0x01, 0x01, 0x02, 0x01, 0x01, 0x01,
        0x03, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x05, 0x01, 0x05, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x04, 0x01, 0x01, 0x06, 0x01, 0x05, 0x01, 0x01, 0x01,
        0x1c, 0x01, 0xa0, 0x57, 0x2b, 0x1a, 0x84, 0xc5, 0x28, 0x80, 0x88, 0x24, 0x80, 0x9c, 0x0b, 0x01,
        0x0f, 0x01, 0x07, 0x01, 0x02, 0x86, 0xea, 0x33, 0x8b, 0xed, 0x20, 0xa0, 0x55, 0x80, 0x20, 0xa0,
        0x65, 0xa0, 0x1a, 0x1a, 0x1a, 0x1a, 0x1a, 0x1a, 0x01, 0x01, 0x02, 0x02, 0x01, 0x02, 0x02, 0x02,
        0x04, 0x01, 0x08, 0x1a, 0x1a, 0x1a, 0x02, 0x01, 0x04, 0x02, 0x08, 0x01, 0x07, 0x1b, 0x02, 0x01,
        0x04, 0x01, 0x05, 0x01, 0x01, 0x03, 0x07, 0x1b, 0x1a, 0x1a, 0x1a, 0x1a, 0x1a, 0x1a, 0x1a, 0x1a,
        0x1a, 0x1a, 0x1a, 0x1e, 0x19, 0x21, 0x19, 0x21, 0x19, 0x21, 0x19, 0x21, 0x19, 0x21, 0x01, 0x91,
        0x35, 0x22,
    ]),
    ("mc", &[
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
    ]),
    ("me", &[
        0x84, 0x88, 0x02, 0x96, 0x34, 0x01, 0x86, 0x1e, 0x04, 0x01, 0x03, 0xa0, 0x85, 0x8b, 0x03,
    ]),
    ("mn", &[
        0x83, 0x00, 0x70, 0x81, 0x13, 0x05, 0x81, 0x09, 0x2d, 0x01, 0x01, 0x01, 0x02, 0x01, 0x02, 0x01,
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
        0x30, 0x0e, 0x01, 0x10, 0x31, 0x04, 0x30, 0x01, 0x01, 0x05, 0x01, 0x01, 0x05, 0x01, 0x28, 0x09,
        0x0c, 0x02, 0x20, 0x04, 0x02, 0x02, 0x01, 0x03, 0x38, 0x01, 0x01, 0x02, 0x03, 0x01, 0x01, 0x03,
        0x3a, 0x08, 0x02, 0x02, 0x80, 0x98, 0x03, 0x01, 0x0d, 0x01, 0x07, 0x04, 0x01, 0x06, 0x01, 0x03,
        0x02, 0x80, 0xc6, 0x40, 0x82, 0xd0, 0x0d, 0x04, 0x01, 0x03, 0x0c, 0x8b, 0xfe, 0x03, 0x80, 0x8d,
        0x01, 0x60, 0x20, 0x82, 0x2a, 0x04, 0x6b, 0x02, 0xa0, 0x75, 0xd4, 0x01, 0x04, 0x0a, 0x20, 0x02,
        0x50, 0x02, 0x81, 0x10, 0x01, 0x03, 0x01, 0x04, 0x01, 0x19, 0x02, 0x05, 0x01, 0x80, 0x97, 0x02,
        0x1a, 0x12, 0x0d, 0x01, 0x26, 0x08, 0x19, 0x0b, 0x2e, 0x03, 0x30, 0x01, 0x02, 0x04, 0x02, 0x02,
        0x27, 0x01, 0x43, 0x06, 0x02, 0x02, 0x02, 0x02, 0x0c, 0x01, 0x08, 0x01, 0x2f, 0x01, 0x33, 0x01,
        0x01, 0x03, 0x02, 0x02, 0x05, 0x02, 0x01, 0x01, 0x2a, 0x02, 0x08, 0x01, 0x80, 0xee, 0x01, 0x02,
        0x01, 0x04, 0x01, 0xa0, 0x4f, 0x30, 0x01, 0x82, 0xe1, 0x10, 0x10, 0x10, 0x83, 0xcd, 0x01, 0x80,
        0xe2, 0x01, 0x80, 0x95, 0x05, 0x86, 0x86, 0x03, 0x01, 0x02, 0x05, 0x04, 0x28, 0x03, 0x04, 0x01,
        0x80, 0xa5, 0x02, 0x82, 0x3d, 0x04, 0x81, 0x83, 0x02, 0x80, 0x99, 0x0b, 0x31, 0x04, 0x7b, 0x01,
        0x36, 0x0f, 0x29, 0x01, 0x02, 0x02, 0x0a, 0x03, 0x31, 0x04, 0x02, 0x02, 0x07, 0x01, 0x3d, 0x03,
        0x24, 0x05, 0x01, 0x08, 0x3e, 0x01, 0x0c, 0x02, 0x34, 0x09, 0x0a, 0x04, 0x02, 0x01, 0x5f, 0x03,
        0x02, 0x01, 0x01, 0x02, 0x06, 0x01, 0x80, 0xa0, 0x01, 0x03, 0x08, 0x15, 0x02, 0x39, 0x02, 0x03,
        0x01, 0x25, 0x07, 0x03, 0x05, 0x80, 0xc3, 0x08, 0x02, 0x03, 0x01, 0x01, 0x17, 0x01, 0x54, 0x06,
        0x01, 0x01, 0x04, 0x02, 0x01, 0x02, 0x80, 0xee, 0x04, 0x06, 0x02, 0x01, 0x02, 0x1b, 0x02, 0x55,
        0x08, 0x02, 0x01, 0x01, 0x02, 0x6a, 0x01, 0x01, 0x01, 0x02, 0x06, 0x01, 0x01, 0x65, 0x03, 0x02,
        0x04, 0x01, 0x05, 0x81, 0x03, 0x09, 0x01, 0x02, 0x81, 0x00, 0x02, 0x01, 0x01, 0x04, 0x01, 0x80,
        0x90, 0x04, 0x02, 0x02, 0x04, 0x01, 0x20, 0x0a, 0x28, 0x06, 0x02, 0x04, 0x08, 0x01, 0x09, 0x06,
        0x02, 0x03, 0x2e, 0x0d, 0x01, 0x02, 0x81, 0x96, 0x07, 0x01, 0x06, 0x01, 0x01, 0x52, 0x16, 0x02,
        0x07, 0x01, 0x02, 0x01, 0x02, 0x7a, 0x06, 0x03, 0x01, 0x01, 0x02, 0x01, 0x07, 0x01, 0x01, 0x48,
        0x02, 0x03, 0x01, 0x01, 0x01, 0x81, 0x5b, 0x02, 0xa0, 0x4b, 0xfb, 0x05, 0x3b, 0x07, 0x84, 0x18,
        0x01, 0x3f, 0x04, 0x51, 0x01, 0xa0, 0x4c, 0xb8, 0x02, 0x92, 0x61, 0x2e, 0x02, 0x17, 0x82, 0x20,
        0x03, 0x11, 0x08, 0x02, 0x07, 0x1e, 0x04, 0x80, 0x94, 0x03, 0x87, 0xbb, 0x37, 0x04, 0x32, 0x08,
        0x01, 0x0e, 0x01, 0x16, 0x05, 0x01, 0x0f, 0x85, 0x50, 0x07, 0x01, 0x11, 0x02, 0x07, 0x01, 0x02,
        0x01, 0x05, 0x81, 0x05, 0x07, 0x81, 0x77, 0x01, 0x3d, 0x04, 0x85, 0xe0, 0x07, 0x6d, 0x07, 0xac,
        0x17, 0xb5, 0x80, 0xf0,
    ]),
    ("nd", &[
        0x30, 0x0a, 0x86, 0x26, 0x0a, 0x80, 0x86, 0x0a, 0x80, 0xc6, 0x0a, 0x81, 0x9c, 0x0a, 0x76, 0x0a,
        0x76, 0x0a, 0x76, 0x0a, 0x76, 0x0a, 0x76, 0x0a, 0x76, 0x0a, 0x76, 0x0a, 0x76, 0x0a, 0x76, 0x0a,
        0x60, 0x0a, 0x76, 0x0a, 0x46, 0x0a, 0x81, 0x16, 0x0a, 0x46, 0x0a, 0x87, 0x46, 0x0a, 0x26, 0x0a,
        0x81, 0x2c, 0x0a, 0x80, 0x80, 0x0a, 0x80, 0xa6, 0x0a, 0x06, 0x0a, 0x80, 0xb6, 0x0a, 0x56, 0x0a,
        0x80, 0x86, 0x0a, 0x06, 0x0a, 0xa0, 0x89, 0xc6, 0x0a, 0x82, 0xa6, 0x0a, 0x26, 0x0a, 0x80, 0xc6,
        0x0a, 0x16, 0x0a, 0x56, 0x0a, 0x81, 0x96, 0x0a, 0xa0, 0x53, 0x16, 0x0a, 0x85, 0x86, 0x0a, 0x88,
        0x86, 0x0a, 0x83, 0x2c, 0x0a, 0x80, 0x80, 0x0a, 0x3c, 0x0a, 0x80, 0x90, 0x0a, 0x81, 0x16, 0x0a,
        0x81, 0x56, 0x0a, 0x76, 0x0a, 0x81, 0x76, 0x0a, 0x66, 0x0a, 0x66, 0x0a, 0x81, 0xa6, 0x0a, 0x66,
        0x0a, 0x82, 0xf6, 0x0a, 0x80, 0xf6, 0x0a, 0x46, 0x0a, 0xa0, 0x4c, 0xb6, 0x0a, 0x56, 0x0a, 0x80,
        0x86, 0x0a, 0xa0, 0x6c, 0x74, 0x32, 0x89, 0x40, 0x0a, 0x81, 0xa6, 0x0a, 0x86, 0x56, 0x0a, 0x92,
        0x96, 0x0a,
    ]),
    ("nl", &[
        0x96, 0xee, 0x03, 0x8a, 0x6f, 0x23, 0x02, 0x04, 0x8e, 0x7e, 0x01, 0x19, 0x09, 0x0e, 0x03, 0xa0,
        0x76, 0xab, 0x0a, 0xa0, 0x5a, 0x50, 0x35, 0x81, 0xcc, 0x01, 0x08, 0x01, 0x80, 0x86, 0x05, 0xa0,
        0x20, 0x2a, 0x6f,
    ]),
    ("no", &[
        0x80, 0xb2, 0x02, 0x05, 0x01, 0x02, 0x03, 0x89, 0x35, 0x06, 0x81, 0x78, 0x06, 0x78, 0x03, 0x80,
        0x85, 0x07, 0x80, 0xd9, 0x07, 0x11, 0x09, 0x81, 0xb1, 0x0a, 0x84, 0x35, 0x14, 0x84, 0x73, 0x0a,
        0x81, 0xe0, 0x01, 0x86, 0x95, 0x01, 0x03, 0x06, 0x06, 0x0a, 0x80, 0xc6, 0x10, 0x29, 0x01, 0x82,
        0xd6, 0x3c, 0x4e, 0x16, 0x82, 0x76, 0x1e, 0x85, 0x69, 0x01, 0x84, 0x94, 0x04, 0x80, 0x8a, 0x0a,
        0x1e, 0x08, 0x01, 0x0f, 0x20, 0x0a, 0x27, 0x0f, 0xa0, 0x75, 0x70, 0x06, 0xa0, 0x58, 0xd1, 0x2d,
        0x41, 0x04, 0x11, 0x02, 0x81, 0x55, 0x1b, 0x24, 0x04, 0x85, 0x34, 0x08, 0x19, 0x07, 0x27, 0x09,
        0x4b, 0x05, 0x16, 0x06, 0x80, 0xa0, 0x02, 0x02, 0x10, 0x02, 0x2e, 0x40, 0x09, 0x34, 0x02, 0x1e,
        0x03, 0x4b, 0x05, 0x68, 0x08, 0x18, 0x08, 0x29, 0x07, 0x81, 0x4a, 0x06, 0x81, 0x60, 0x1f, 0x80,
        0x9e, 0x0a, 0x2a, 0x04, 0x70, 0x07, 0x80, 0x86, 0x14, 0x81, 0x7b, 0x14, 0x85, 0x45, 0x02, 0x81,
        0xae, 0x09, 0x83, 0x67, 0x13, 0x83, 0x53, 0x15, 0xa0, 0x4b, 0x86, 0x07, 0x83, 0x1e, 0x17, 0xa0,
        0x64, 0x49, 0x14, 0x6c, 0x19, 0x95, 0x4e, 0x09, 0x83, 0xa1, 0x3b, 0x01, 0x03, 0x01, 0x04, 0x4c,
        0x2d, 0x01, 0x0f, 0x83, 0xc2, 0x0d,
    ]),
    ("pc", &[
        0x5f, 0x01, 0x9f, 0xdf, 0x02, 0x13, 0x01, 0xa0, 0xdd, 0xde, 0x02, 0x18, 0x03, 0x80, 0xef, 0x01,
    ]),
    ("pd", &[
        0x2d, 0x01, 0x85, 0x5c, 0x01, 0x33, 0x01, 0x8e, 0x41, 0x01, 0x84, 0x05, 0x01, 0x88, 0x09, 0x06,
        0x8e, 0x01, 0x01, 0x02, 0x01, 0x1f, 0x02, 0x04, 0x01, 0x1c, 0x01, 0x81, 0xbe, 0x01, 0x13, 0x01,
        0x6f, 0x01, 0xa0, 0xcd, 0x90, 0x02, 0x25, 0x01, 0x0a, 0x01, 0x80, 0xa9, 0x01, 0x8f, 0x9f, 0x01,
    ]),
    ("pe", &[
        0x29, 0x01, 0x33, 0x01, 0x1f, 0x01, 0x8e, 0xbd, 0x01, 0x01, 0x01, 0x87, 0x5e, 0x01, 0x89, 0xa9,
        0x01, 0x37, 0x01, 0x0f, 0x01, 0x82, 0x7a, 0x01, 0x01, 0x01, 0x1e, 0x01, 0x84, 0x3e, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x50, 0x01, 0x20, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x81, 0x94, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x40, 0x01,
        0x01, 0x01, 0x21, 0x01, 0x84, 0x25, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x2c, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x81, 0xac, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x03, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02, 0x02, 0xa0, 0xcd, 0x1e, 0x01, 0x80, 0xd9,
        0x01, 0x1d, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x03, 0x01, 0x11, 0x01, 0x01, 0x01, 0x01, 0x01, 0x80, 0xaa, 0x01, 0x33, 0x01, 0x1f, 0x01,
        0x02, 0x01, 0x02, 0x01,
    ]),
    ("pf", &[
        0x80, 0xbb, 0x01, 0x9f, 0x5d, 0x01, 0x03, 0x01, 0x1c, 0x01, 0x8d, 0xc8, 0x01, 0x01, 0x01, 0x04,
        0x01, 0x02, 0x01, 0x0f, 0x01, 0x03, 0x01,
    ]),
    ("pi", &[
        0x80, 0xab, 0x01, 0x9f, 0x6c, 0x01, 0x02, 0x02, 0x02, 0x01, 0x19, 0x01, 0x8d, 0xc8, 0x01, 0x01,
        0x01, 0x04, 0x01, 0x02, 0x01, 0x0f, 0x01, 0x03, 0x01,
    ]),
    ("po", &[
        0x21, 0x03, 0x01, 0x03, 0x02, 0x01, 0x01, 0x01, 0x01, 0x02, 0x0a, 0x02, 0x03, 0x02, 0x1b, 0x01,
        0x44, 0x01, 0x05, 0x01, 0x0e, 0x02, 0x07, 0x01, 0x82, 0xbe, 0x01, 0x08, 0x01, 0x81, 0xd2, 0x06,
        0x29, 0x01, 0x36, 0x01, 0x02, 0x01, 0x02, 0x01, 0x2c, 0x02, 0x14, 0x02, 0x01, 0x02, 0x0d, 0x01,
        0x01, 0x03, 0x4a, 0x04, 0x66, 0x01, 0x2b, 0x0e, 0x80, 0xe9, 0x03, 0x36, 0x0f, 0x1f, 0x01, 0x81,
        0x05, 0x02, 0x0a, 0x01, 0x80, 0x8c, 0x01, 0x78, 0x01, 0x79, 0x01, 0x81, 0x86, 0x01, 0x0c, 0x01,
        0x81, 0x6f, 0x01, 0x5a, 0x01, 0x0a, 0x02, 0x80, 0xa8, 0x0f, 0x01, 0x01, 0x70, 0x01, 0x4a, 0x05,
        0x04, 0x02, 0x6f, 0x06, 0x80, 0xab, 0x01, 0x82, 0x64, 0x09, 0x83, 0x05, 0x01, 0x7c, 0x03, 0x47,
        0x02, 0x80, 0x9d, 0x03, 0x01, 0x03, 0x25, 0x06, 0x01, 0x04, 0x81, 0x39, 0x02, 0x80, 0xd8, 0x02,
        0x80, 0x80, 0x07, 0x01, 0x06, 0x80, 0xac, 0x07, 0x1c, 0x02, 0x7d, 0x04, 0x3b, 0x05, 0x3e, 0x02,
        0x40, 0x08, 0x0b, 0x01, 0x83, 0x42, 0x02, 0x08, 0x08, 0x08, 0x09, 0x02, 0x04, 0x02, 0x03, 0x03,
        0x0b, 0x01, 0x01, 0x01, 0x0a, 0x8c, 0x9a, 0x04, 0x01, 0x02, 0x70, 0x01, 0x80, 0x8f, 0x02, 0x04,
        0x03, 0x02, 0x01, 0x02, 0x09, 0x01, 0x02, 0x01, 0x01, 0x02, 0x02, 0x0a, 0x05, 0x01, 0x0a, 0x02,
        0x04, 0x01, 0x01, 0x01, 0x0d, 0x02, 0x03, 0x81, 0xac, 0x03, 0x39, 0x01, 0x80, 0xbd, 0x01, 0xa0,
        0x74, 0x02, 0x02, 0x81, 0x0d, 0x03, 0x63, 0x01, 0x0a, 0x01, 0x73, 0x06, 0x81, 0x7c, 0x04, 0x56,
        0x02, 0x28, 0x03, 0x01, 0x01, 0x31, 0x02, 0x2f, 0x01, 0x61, 0x0d, 0x10, 0x02, 0x7c, 0x04, 0x7e,
        0x02, 0x10, 0x02, 0x80, 0xf9, 0x01, 0xa0, 0x52, 0x24, 0x07, 0x02, 0x01, 0x16, 0x01, 0x14, 0x02,
        0x02, 0x04, 0x03, 0x03, 0x01, 0x04, 0x07, 0x03, 0x06, 0x01, 0x01, 0x02, 0x80, 0x95, 0x03, 0x01,
        0x03, 0x02, 0x01, 0x01, 0x01, 0x01, 0x02, 0x0a, 0x02, 0x03, 0x02, 0x1b, 0x01, 0x24, 0x01, 0x02,
        0x02, 0x81, 0x9a, 0x03, 0x82, 0x9c, 0x01, 0x30, 0x01, 0x81, 0x9e, 0x01, 0x82, 0xe7, 0x01, 0x80,
        0xc7, 0x01, 0x1f, 0x01, 0x81, 0x10, 0x09, 0x26, 0x01, 0x70, 0x07, 0x42, 0x07, 0x59, 0x04, 0x83,
        0xb8, 0x05, 0x2c, 0x04, 0x80, 0xbd, 0x07, 0x6d, 0x02, 0x01, 0x04, 0x7e, 0x04, 0x30, 0x02, 0x4f,
        0x04, 0x04, 0x01, 0x0d, 0x01, 0x01, 0x03, 0x58, 0x06, 0x6b, 0x01, 0x81, 0xa1, 0x05, 0x0a, 0x02,
        0x01, 0x01, 0x68, 0x01, 0x80, 0xfa, 0x17, 0x69, 0x03, 0x1c, 0x0d, 0x4c, 0x01, 0x80, 0x82, 0x03,
        0x80, 0xfc, 0x01, 0x81, 0x08, 0x03, 0x80, 0x9b, 0x01, 0x5c, 0x08, 0x53, 0x03, 0x01, 0x05, 0x81,
        0x9e, 0x05, 0x2a, 0x02, 0x82, 0x85, 0x02, 0x81, 0x06, 0x01, 0x84, 0x70, 0x05, 0x8b, 0x7c, 0x02,
        0xa0, 0x3a, 0x7b, 0x02, 0x80, 0x85, 0x01, 0x41, 0x05, 0x08, 0x01, 0x83, 0x52, 0x04, 0x81, 0x47,
        0x01, 0xa0, 0x4c, 0xbc, 0x01, 0x9d, 0xe7, 0x05, 0x8e, 0xd2, 0x02,
    ]),
    ("ps", &[
        0x28, 0x01, 0x32, 0x01, 0x1f, 0x01, 0x8e, 0xbe, 0x01, 0x01, 0x01, 0x87, 0x5e, 0x01, 0x89, 0x7e,
        0x01, 0x03, 0x01, 0x26, 0x01, 0x37, 0x01, 0x0f, 0x01, 0x82, 0x7a, 0x01, 0x01, 0x01, 0x1e, 0x01,
        0x84, 0x3e, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x50,
        0x01, 0x20, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x81, 0x94, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x40, 0x01, 0x01, 0x01, 0x21, 0x01, 0x84, 0x25, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x19, 0x01, 0x12, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x81, 0xac, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x03, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02, 0x01,
        0xa0, 0xcd, 0x21, 0x01, 0x80, 0xd7, 0x01, 0x1d, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x03, 0x01, 0x11, 0x01, 0x01, 0x01, 0x01, 0x01, 0x80,
        0xaa, 0x01, 0x32, 0x01, 0x1f, 0x01, 0x03, 0x01, 0x02, 0x01,
    ]),
    ("sc", &[
        0x24, 0x01, 0x7d, 0x04, 0x84, 0xe9, 0x01, 0x7b, 0x01, 0x81, 0xf2, 0x02, 0x81, 0xf2, 0x02, 0x07,
        0x01, 0x80, 0xf5, 0x01, 0x81, 0x07, 0x01, 0x82, 0x45, 0x01, 0x89, 0x9b, 0x01, 0x88, 0xc4, 0x21,
        0xa0, 0x87, 0x77, 0x01, 0xa0, 0x55, 0xc3, 0x01, 0x6c, 0x01, 0x80, 0x9a, 0x01, 0x80, 0xdb, 0x02,
        0x03, 0x02, 0x9f, 0xf6, 0x04, 0xa0, 0xc3, 0x1e, 0x01, 0x89, 0xb0, 0x01,
    ]),
    ("sk", &[
        0x5e, 0x01, 0x01, 0x01, 0x47, 0x01, 0x06, 0x01, 0x04, 0x01, 0x03, 0x01, 0x82, 0x09, 0x04, 0x0c,
        0x0e, 0x05, 0x07, 0x01, 0x01, 0x01, 0x11, 0x75, 0x01, 0x0e, 0x02, 0x85, 0x02, 0x01, 0x97, 0x34,
        0x01, 0x01, 0x03, 0x0b, 0x03, 0x0d, 0x03, 0x0d, 0x03, 0x0d, 0x02, 0x90, 0x9c, 0x02, 0xa0, 0x76,
        0x63, 0x17, 0x09, 0x02, 0x67, 0x02, 0x83, 0xd0, 0x01, 0x0e, 0x02, 0xa0, 0x50, 0x46, 0x11, 0x83,
        0x7b, 0x01, 0x01, 0x01, 0x80, 0xa2, 0x01, 0xa0, 0xf4, 0x17, 0x05,
    ]),
    ("sm", &[
        0x2b, 0x01, 0x10, 0x03, 0x3d, 0x01, 0x01, 0x01, 0x2d, 0x01, 0x04, 0x01, 0x25, 0x01, 0x1f, 0x01,
        0x82, 0xfe, 0x01, 0x82, 0x0f, 0x03, 0x9a, 0x3b, 0x01, 0x0d, 0x01, 0x27, 0x03, 0x0d, 0x03, 0x80,
        0x8b, 0x01, 0x27, 0x05, 0x06, 0x01, 0x44, 0x05, 0x05, 0x02, 0x04, 0x01, 0x02, 0x01, 0x02, 0x01,
        0x07, 0x01, 0x1f, 0x02, 0x02, 0x01, 0x01, 0x01, 0x1f, 0x81, 0x0c, 0x20, 0x02, 0x5a, 0x01, 0x1e,
        0x19, 0x28, 0x06, 0x81, 0xd5, 0x01, 0x09, 0x01, 0x36, 0x08, 0x6f, 0x01, 0x81, 0x50, 0x05, 0x02,
        0x1f, 0x0a, 0x10, 0x81, 0x00, 0x80, 0x83, 0x16, 0x3f, 0x04, 0x20, 0x02, 0x81, 0x02, 0x30, 0x15,
        0x02, 0x06, 0xa0, 0xcf, 0xdc, 0x01, 0x83, 0x38, 0x01, 0x01, 0x03, 0x80, 0xa4, 0x01, 0x10, 0x03,
        0x3d, 0x01, 0x01, 0x01, 0x80, 0x83, 0x01, 0x06, 0x04, 0xa0, 0xd6, 0xd4, 0x01, 0x19, 0x01, 0x1f,
        0x01, 0x19, 0x01, 0x1f, 0x01, 0x19, 0x01, 0x1f, 0x01, 0x19, 0x01, 0x1f, 0x01, 0x19, 0x01, 0x97,
        0x2c, 0x02,
    ]),
    ("so", &[
        0x80, 0xa6, 0x01, 0x02, 0x01, 0x04, 0x01, 0x01, 0x01, 0x83, 0xd1, 0x01, 0x81, 0x0a, 0x02, 0x7f,
        0x02, 0x80, 0xce, 0x01, 0x0a, 0x01, 0x13, 0x02, 0x80, 0xf7, 0x01, 0x82, 0x03, 0x01, 0x81, 0x75,
        0x01, 0x80, 0x82, 0x06, 0x01, 0x01, 0x80, 0x84, 0x01, 0x80, 0xcf, 0x01, 0x29, 0x01, 0x81, 0x87,
        0x03, 0x0f, 0x01, 0x01, 0x03, 0x02, 0x06, 0x14, 0x01, 0x01, 0x01, 0x01, 0x01, 0x80, 0x85, 0x08,
        0x01, 0x06, 0x01, 0x02, 0x05, 0x04, 0x80, 0xc5, 0x02, 0x82, 0xf0, 0x0a, 0x82, 0xd3, 0x01, 0x82,
        0xd2, 0x01, 0x80, 0x9d, 0x22, 0x81, 0x61, 0x0a, 0x09, 0x09, 0x85, 0x83, 0x02, 0x01, 0x04, 0x01,
        0x02, 0x0a, 0x01, 0x01, 0x02, 0x06, 0x06, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x04, 0x01, 0x0b,
        0x02, 0x0e, 0x01, 0x01, 0x02, 0x01, 0x01, 0x3a, 0x02, 0x09, 0x05, 0x02, 0x04, 0x01, 0x02, 0x01,
        0x02, 0x01, 0x07, 0x01, 0x1f, 0x02, 0x02, 0x01, 0x01, 0x01, 0x1f, 0x81, 0x0c, 0x08, 0x04, 0x14,
        0x02, 0x07, 0x02, 0x51, 0x01, 0x1e, 0x19, 0x28, 0x06, 0x45, 0x19, 0x0b, 0x51, 0x4e, 0x16, 0x80,
        0xb7, 0x01, 0x09, 0x01, 0x36, 0x08, 0x6f, 0x01, 0x80, 0xf8, 0x2c, 0x2c, 0x40, 0x81, 0x00, 0x82,
        0x00, 0x30, 0x15, 0x02, 0x06, 0x27, 0x02, 0x20, 0x01, 0x69, 0x80, 0xe5, 0x06, 0x81, 0x65, 0x02,
        0x2e, 0x1a, 0x01, 0x59, 0x0c, 0x80, 0xd6, 0x1a, 0x0c, 0x08, 0x01, 0x0d, 0x02, 0x0c, 0x01, 0x15,
        0x02, 0x06, 0x02, 0x81, 0x50, 0x02, 0x04, 0x0a, 0x20, 0x24, 0x1c, 0x1f, 0x0b, 0x1e, 0x08, 0x01,
        0x0f, 0x20, 0x0a, 0x27, 0x0f, 0x81, 0x40, 0x99, 0xc0, 0x40, 0xa0, 0x56, 0x90, 0x37, 0x83, 0x61,
        0x04, 0x0a, 0x02, 0x01, 0x01, 0x82, 0x3d, 0x03, 0xa0, 0x52, 0xc6, 0x10, 0x7f, 0x01, 0x2d, 0x03,
        0x81, 0xe4, 0x01, 0x03, 0x01, 0x04, 0x02, 0x0d, 0x02, 0x81, 0x39, 0x09, 0x39, 0x11, 0x02, 0x03,
        0x01, 0x0d, 0x03, 0x01, 0x2f, 0x2d, 0x86, 0x7a, 0x02, 0x82, 0x4f, 0x01, 0x8c, 0x76, 0x01, 0x88,
        0x95, 0x08, 0x04, 0x11, 0xa0, 0x4b, 0x4a, 0x04, 0x05, 0x01, 0xa0, 0x51, 0x56, 0x01, 0x92, 0xb3,
        0x74, 0x3c, 0x80, 0xf6, 0x0a, 0x27, 0x02, 0x3c, 0x05, 0x03, 0x16, 0x02, 0x07, 0x1e, 0x04, 0x3d,
        0x15, 0x42, 0x03, 0x01, 0x80, 0xba, 0x57, 0x84, 0xa9, 0x82, 0x00, 0x37, 0x04, 0x32, 0x08, 0x01,
        0x0e, 0x01, 0x02, 0x86, 0xc8, 0x01, 0x8b, 0x5c, 0x01, 0x80, 0x81, 0x01, 0x82, 0xd1, 0x2c, 0x04,
        0x64, 0x0c, 0x0f, 0x02, 0x0f, 0x01, 0x0f, 0x01, 0x25, 0x17, 0x80, 0xa1, 0x38, 0x1d, 0x0d, 0x2c,
        0x04, 0x09, 0x07, 0x02, 0x0e, 0x06, 0x80, 0x9a, 0x80, 0xfb, 0x05, 0x82, 0xd8, 0x05, 0x10, 0x03,
        0x0d, 0x03, 0x74, 0x0c, 0x59, 0x07, 0x0c, 0x04, 0x01, 0x0f, 0x0c, 0x04, 0x38, 0x08, 0x0a, 0x06,
        0x28, 0x08, 0x1e, 0x02, 0x02, 0x4e, 0x81, 0x54, 0x0c, 0x0e, 0x02, 0x05, 0x03, 0x05, 0x03, 0x07,
        0x09, 0x1d, 0x03, 0x0b, 0x05, 0x06, 0x0a, 0x0a, 0x06, 0x08, 0x08, 0x07, 0x09, 0x80, 0x93, 0x01,
        0x37,
    ]),
    ("zl", &[
        0xa0, 0x20, 0x28, 0x01,
    ]),
    ("zp", &[
        0xa0, 0x20, 0x29, 0x01,
    ]),
    ("zs", &[
        0x20, 0x01, 0x7f, 0x01, 0x95, 0xdf, 0x01, 0x89, 0x7f, 0x0b, 0x24, 0x01, 0x2f, 0x01, 0x8f, 0xa0,
        0x01,
    ]),
];
