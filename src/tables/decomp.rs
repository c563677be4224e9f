// decomp.rs - Generated by tools/gen_tables.py (UCD 14.0.0). Do not edit.
//
// Full canonical/compatibility decompositions, length-prefixed
// in one shared pool. Hangul syllables are algorithmic and absent.
// COMPAT_KEYS only lists codepoints whose compatibility
// decomposition differs from the canonical one.

pub static DECOMP_POOL: &[u32] = &[
    0x1, 0x20, 0x2, 0x20, 0x308, 0x1, 0x61, 0x2, 0x20, 0x304, 0x1, 0x32,
    0x1, 0x33, 0x2, 0x20, 0x301, 0x1, 0x3bc, 0x2, 0x20, 0x327, 0x1, 0x31,
    0x1, 0x6f, 0x3, 0x31, 0x2044, 0x34, 0x3, 0x31, 0x2044, 0x32, 0x3, 0x33,
    0x2044, 0x34, 0x2, 0x41, 0x300, 0x2, 0x41, 0x301, 0x2, 0x41, 0x302, 0x2,
    0x41, 0x303, 0x2, 0x41, 0x308, 0x2, 0x41, 0x30a, 0x2, 0x43, 0x327, 0x2,
    0x45, 0x300, 0x2, 0x45, 0x301, 0x2, 0x45, 0x302, 0x2, 0x45, 0x308, 0x2,
    0x49, 0x300, 0x2, 0x49, 0x301, 0x2, 0x49, 0x302, 0x2, 0x49, 0x308, 0x2,
    0x4e, 0x303, 0x2, 0x4f, 0x300, 0x2, 0x4f, 0x301, 0x2, 0x4f, 0x302, 0x2,
    0x4f, 0x303, 0x2, 0x4f, 0x308, 0x2, 0x55, 0x300, 0x2, 0x55, 0x301, 0x2,
    0x55, 0x302, 0x2, 0x55, 0x308, 0x2, 0x59, 0x301, 0x2, 0x61, 0x300, 0x2,
    0x61, 0x301, 0x2, 0x61, 0x302, 0x2, 0x61, 0x303, 0x2, 0x61, 0x308, 0x2,
    0x61, 0x30a, 0x2, 0x63, 0x327, 0x2, 0x65, 0x300, 0x2, 0x65, 0x301, 0x2,
    0x65, 0x302, 0x2, 0x65, 0x308, 0x2, 0x69, 0x300, 0x2, 0x69, 0x301, 0x2,
    0x69, 0x302, 0x2, 0x69, 0x308, 0x2, 0x6e, 0x303, 0x2, 0x6f, 0x300, 0x2,
    0x6f, 0x301, 0x2, 0x6f, 0x302, 0x2, 0x6f, 0x303, 0x2, 0x6f, 0x308, 0x2,
    0x75, 0x300, 0x2, 0x75, 0x301, 0x2, 0x75, 0x302, 0x2, 0x75, 0x308, 0x2,
    0x79, 0x301, 0x2, 0x79, 0x308, 0x2, 0x41, 0x304, 0x2, 0x61, 0x304, 0x2,
    0x41, 0x306, 0x2, 0x61, 0x306, 0x2, 0x41, 0x328, 0x2, 0x61, 0x328, 0x2,
    0x43, 0x301, 0x2, 0x63, 0x301, 0x2, 0x43, 0x302, 0x2, 0x63, 0x302, 0x2,
    0x43, 0x307, 0x2, 0x63, 0x307, 0x2, 0x43, 0x30c, 0x2, 0x63, 0x30c, 0x2,
    0x44, 0x30c, 0x2, 0x64, 0x30c, 0x2, 0x45, 0x304, 0x2, 0x65, 0x304, 0x2,
    0x45, 0x306, 0x2, 0x65, 0x306, 0x2, 0x45, 0x307, 0x2, 0x65, 0x307, 0x2,
    0x45, 0x328, 0x2, 0x65, 0x328, 0x2, 0x45, 0x30c, 0x2, 0x65, 0x30c, 0x2,
    0x47, 0x302, 0x2, 0x67, 0x302, 0x2, 0x47, 0x306, 0x2, 0x67, 0x306, 0x2,
    0x47, 0x307, 0x2, 0x67, 0x307, 0x2, 0x47, 0x327, 0x2, 0x67, 0x327, 0x2,
    0x48, 0x302, 0x2, 0x68, 0x302, 0x2, 0x49, 0x303, 0x2, 0x69, 0x303, 0x2,
    0x49, 0x304, 0x2, 0x69, 0x304, 0x2, 0x49, 0x306, 0x2, 0x69, 0x306, 0x2,
    0x49, 0x328, 0x2, 0x69, 0x328, 0x2, 0x49, 0x307, 0x2, 0x49, 0x4a, 0x2,
    0x69, 0x6a, 0x2, 0x4a, 0x302, 0x2, 0x6a, 0x302, 0x2, 0x4b, 0x327, 0x2,
    0x6b, 0x327, 0x2, 0x4c, 0x301, 0x2, 0x6c, 0x301, 0x2, 0x4c, 0x327, 0x2,
    0x6c, 0x327, 0x2, 0x4c, 0x30c, 0x2, 0x6c, 0x30c, 0x2, 0x4c, 0xb7, 0x2,
    0x6c, 0xb7, 0x2, 0x4e, 0x301, 0x2, 0x6e, 0x301, 0x2, 0x4e, 0x327, 0x2,
    0x6e, 0x327, 0x2, 0x4e, 0x30c, 0x2, 0x6e, 0x30c, 0x2, 0x2bc, 0x6e, 0x2,
    0x4f, 0x304, 0x2, 0x6f, 0x304, 0x2, 0x4f, 0x306, 0x2, 0x6f, 0x306, 0x2,
    0x4f, 0x30b, 0x2, 0x6f, 0x30b, 0x2, 0x52, 0x301, 0x2, 0x72, 0x301, 0x2,
    0x52, 0x327, 0x2, 0x72, 0x327, 0x2, 0x52, 0x30c, 0x2, 0x72, 0x30c, 0x2,
    0x53, 0x301, 0x2, 0x73, 0x301, 0x2, 0x53, 0x302, 0x2, 0x73, 0x302, 0x2,
    0x53, 0x327, 0x2, 0x73, 0x327, 0x2, 0x53, 0x30c, 0x2, 0x73, 0x30c, 0x2,
    0x54, 0x327, 0x2, 0x74, 0x327, 0x2, 0x54, 0x30c, 0x2, 0x74, 0x30c, 0x2,
    0x55, 0x303, 0x2, 0x75, 0x303, 0x2, 0x55, 0x304, 0x2, 0x75, 0x304, 0x2,
    0x55, 0x306, 0x2, 0x75, 0x306, 0x2, 0x55, 0x30a, 0x2, 0x75, 0x30a, 0x2,
    0x55, 0x30b, 0x2, 0x75, 0x30b, 0x2, 0x55, 0x328, 0x2, 0x75, 0x328, 0x2,
    0x57, 0x302, 0x2, 0x77, 0x302, 0x2, 0x59, 0x302, 0x2, 0x79, 0x302, 0x2,
    0x59, 0x308, 0x2, 0x5a, 0x301, 0x2, 0x7a, 0x301, 0x2, 0x5a, 0x307, 0x2,
    0x7a, 0x307, 0x2, 0x5a, 0x30c, 0x2, 0x7a, 0x30c, 0x1, 0x73, 0x2, 0x4f,
    0x31b, 0x2, 0x6f, 0x31b, 0x2, 0x55, 0x31b, 0x2, 0x75, 0x31b, 0x3, 0x44,
    0x5a, 0x30c, 0x3, 0x44, 0x7a, 0x30c, 0x3, 0x64, 0x7a, 0x30c, 0x2, 0x4c,
    0x4a, 0x2, 0x4c, 0x6a, 0x2, 0x6c, 0x6a, 0x2, 0x4e, 0x4a, 0x2, 0x4e,
    0x6a, 0x2, 0x6e, 0x6a, 0x2, 0x41, 0x30c, 0x2, 0x61, 0x30c, 0x2, 0x49,
    0x30c, 0x2, 0x69, 0x30c, 0x2, 0x4f, 0x30c, 0x2, 0x6f, 0x30c, 0x2, 0x55,
    0x30c, 0x2, 0x75, 0x30c, 0x3, 0x55, 0x308, 0x304, 0x3, 0x75, 0x308, 0x304,
    0x3, 0x55, 0x308, 0x301, 0x3, 0x75, 0x308, 0x301, 0x3, 0x55, 0x308, 0x30c,
    0x3, 0x75, 0x308, 0x30c, 0x3, 0x55, 0x308, 0x300, 0x3, 0x75, 0x308, 0x300,
    0x3, 0x41, 0x308, 0x304, 0x3, 0x61, 0x308, 0x304, 0x3, 0x41, 0x307, 0x304,
    0x3, 0x61, 0x307, 0x304, 0x2, 0xc6, 0x304, 0x2, 0xe6, 0x304, 0x2, 0x47,
    0x30c, 0x2, 0x67, 0x30c, 0x2, 0x4b, 0x30c, 0x2, 0x6b, 0x30c, 0x2, 0x4f,
    0x328, 0x2, 0x6f, 0x328, 0x3, 0x4f, 0x328, 0x304, 0x3, 0x6f, 0x328, 0x304,
    0x2, 0x1b7, 0x30c, 0x2, 0x292, 0x30c, 0x2, 0x6a, 0x30c, 0x2, 0x44, 0x5a,
    0x2, 0x44, 0x7a, 0x2, 0x64, 0x7a, 0x2, 0x47, 0x301, 0x2, 0x67, 0x301,
    0x2, 0x4e, 0x300, 0x2, 0x6e, 0x300, 0x3, 0x41, 0x30a, 0x301, 0x3, 0x61,
    0x30a, 0x301, 0x2, 0xc6, 0x301, 0x2, 0xe6, 0x301, 0x2, 0xd8, 0x301, 0x2,
    0xf8, 0x301, 0x2, 0x41, 0x30f, 0x2, 0x61, 0x30f, 0x2, 0x41, 0x311, 0x2,
    0x61, 0x311, 0x2, 0x45, 0x30f, 0x2, 0x65, 0x30f, 0x2, 0x45, 0x311, 0x2,
    0x65, 0x311, 0x2, 0x49, 0x30f, 0x2, 0x69, 0x30f, 0x2, 0x49, 0x311, 0x2,
    0x69, 0x311, 0x2, 0x4f, 0x30f, 0x2, 0x6f, 0x30f, 0x2, 0x4f, 0x311, 0x2,
    0x6f, 0x311, 0x2, 0x52, 0x30f, 0x2, 0x72, 0x30f, 0x2, 0x52, 0x311, 0x2,
    0x72, 0x311, 0x2, 0x55, 0x30f, 0x2, 0x75, 0x30f, 0x2, 0x55, 0x311, 0x2,
    0x75, 0x311, 0x2, 0x53, 0x326, 0x2, 0x73, 0x326, 0x2, 0x54, 0x326, 0x2,
    0x74, 0x326, 0x2, 0x48, 0x30c, 0x2, 0x68, 0x30c, 0x2, 0x41, 0x307, 0x2,
    0x61, 0x307, 0x2, 0x45, 0x327, 0x2, 0x65, 0x327, 0x3, 0x4f, 0x308, 0x304,
    0x3, 0x6f, 0x308, 0x304, 0x3, 0x4f, 0x303, 0x304, 0x3, 0x6f, 0x303, 0x304,
    0x2, 0x4f, 0x307, 0x2, 0x6f, 0x307, 0x3, 0x4f, 0x307, 0x304, 0x3, 0x6f,
    0x307, 0x304, 0x2, 0x59, 0x304, 0x2, 0x79, 0x304, 0x1, 0x68, 0x1, 0x266,
    0x1, 0x6a, 0x1, 0x72, 0x1, 0x279, 0x1, 0x27b, 0x1, 0x281, 0x1, 0x77,
    0x1, 0x79, 0x2, 0x20, 0x306, 0x2, 0x20, 0x307, 0x2, 0x20, 0x30a, 0x2,
    0x20, 0x328, 0x2, 0x20, 0x303, 0x2, 0x20, 0x30b, 0x1, 0x263, 0x1, 0x6c,
    0x1, 0x78, 0x1, 0x295, 0x1, 0x300, 0x1, 0x301, 0x1, 0x313, 0x2, 0x308,
    0x301, 0x1, 0x2b9, 0x2, 0x20, 0x345, 0x1, 0x3b, 0x2, 0xa8, 0x301, 0x3,
    0x20, 0x308, 0x301, 0x2, 0x391, 0x301, 0x1, 0xb7, 0x2, 0x395, 0x301, 0x2,
    0x397, 0x301, 0x2, 0x399, 0x301, 0x2, 0x39f, 0x301, 0x2, 0x3a5, 0x301, 0x2,
    0x3a9, 0x301, 0x3, 0x3b9, 0x308, 0x301, 0x2, 0x399, 0x308, 0x2, 0x3a5, 0x308,
    0x2, 0x3b1, 0x301, 0x2, 0x3b5, 0x301, 0x2, 0x3b7, 0x301, 0x2, 0x3b9, 0x301,
    0x3, 0x3c5, 0x308, 0x301, 0x2, 0x3b9, 0x308, 0x2, 0x3c5, 0x308, 0x2, 0x3bf,
    0x301, 0x2, 0x3c5, 0x301, 0x2, 0x3c9, 0x301, 0x1, 0x3b2, 0x1, 0x3b8, 0x1,
    0x3a5, 0x2, 0x3d2, 0x301, 0x2, 0x3d2, 0x308, 0x1, 0x3c6, 0x1, 0x3c0, 0x1,
    0x3ba, 0x1, 0x3c1, 0x1, 0x3c2, 0x1, 0x398, 0x1, 0x3b5, 0x1, 0x3a3, 0x2,
    0x415, 0x300, 0x2, 0x415, 0x308, 0x2, 0x413, 0x301, 0x2, 0x406, 0x308, 0x2,
    0x41a, 0x301, 0x2, 0x418, 0x300, 0x2, 0x423, 0x306, 0x2, 0x418, 0x306, 0x2,
    0x438, 0x306, 0x2, 0x435, 0x300, 0x2, 0x435, 0x308, 0x2, 0x433, 0x301, 0x2,
    0x456, 0x308, 0x2, 0x43a, 0x301, 0x2, 0x438, 0x300, 0x2, 0x443, 0x306, 0x2,
    0x474, 0x30f, 0x2, 0x475, 0x30f, 0x2, 0x416, 0x306, 0x2, 0x436, 0x306, 0x2,
    0x410, 0x306, 0x2, 0x430, 0x306, 0x2, 0x410, 0x308, 0x2, 0x430, 0x308, 0x2,
    0x415, 0x306, 0x2, 0x435, 0x306, 0x2, 0x4d8, 0x308, 0x2, 0x4d9, 0x308, 0x2,
    0x416, 0x308, 0x2, 0x436, 0x308, 0x2, 0x417, 0x308, 0x2, 0x437, 0x308, 0x2,
    0x418, 0x304, 0x2, 0x438, 0x304, 0x2, 0x418, 0x308, 0x2, 0x438, 0x308, 0x2,
    0x41e, 0x308, 0x2, 0x43e, 0x308, 0x2, 0x4e8, 0x308, 0x2, 0x4e9, 0x308, 0x2,
    0x42d, 0x308, 0x2, 0x44d, 0x308, 0x2, 0x423, 0x304, 0x2, 0x443, 0x304, 0x2,
    0x423, 0x308, 0x2, 0x443, 0x308, 0x2, 0x423, 0x30b, 0x2, 0x443, 0x30b, 0x2,
    0x427, 0x308, 0x2, 0x447, 0x308, 0x2, 0x42b, 0x308, 0x2, 0x44b, 0x308, 0x2,
    0x565, 0x582, 0x2, 0x627, 0x653, 0x2, 0x627, 0x654, 0x2, 0x648, 0x654, 0x2,
    0x627, 0x655, 0x2, 0x64a, 0x654, 0x2, 0x627, 0x674, 0x2, 0x648, 0x674, 0x2,
    0x6c7, 0x674, 0x2, 0x64a, 0x674, 0x2, 0x6d5, 0x654, 0x2, 0x6c1, 0x654, 0x2,
    0x6d2, 0x654, 0x2, 0x928, 0x93c, 0x2, 0x930, 0x93c, 0x2, 0x933, 0x93c, 0x2,
    0x915, 0x93c, 0x2, 0x916, 0x93c, 0x2, 0x917, 0x93c, 0x2, 0x91c, 0x93c, 0x2,
    0x921, 0x93c, 0x2, 0x922, 0x93c, 0x2, 0x92b, 0x93c, 0x2, 0x92f, 0x93c, 0x2,
    0x9c7, 0x9be, 0x2, 0x9c7, 0x9d7, 0x2, 0x9a1, 0x9bc, 0x2, 0x9a2, 0x9bc, 0x2,
    0x9af, 0x9bc, 0x2, 0xa32, 0xa3c, 0x2, 0xa38, 0xa3c, 0x2, 0xa16, 0xa3c, 0x2,
    0xa17, 0xa3c, 0x2, 0xa1c, 0xa3c, 0x2, 0xa2b, 0xa3c, 0x2, 0xb47, 0xb56, 0x2,
    0xb47, 0xb3e, 0x2, 0xb47, 0xb57, 0x2, 0xb21, 0xb3c, 0x2, 0xb22, 0xb3c, 0x2,
    0xb92, 0xbd7, 0x2, 0xbc6, 0xbbe, 0x2, 0xbc7, 0xbbe, 0x2, 0xbc6, 0xbd7, 0x2,
    0xc46, 0xc56, 0x2, 0xcbf, 0xcd5, 0x2, 0xcc6, 0xcd5, 0x2, 0xcc6, 0xcd6, 0x2,
    0xcc6, 0xcc2, 0x3, 0xcc6, 0xcc2, 0xcd5, 0x2, 0xd46, 0xd3e, 0x2, 0xd47, 0xd3e,
    0x2, 0xd46, 0xd57, 0x2, 0xdd9, 0xdca, 0x2, 0xdd9, 0xdcf, 0x3, 0xdd9, 0xdcf,
    0xdca, 0x2, 0xdd9, 0xddf, 0x2, 0xe4d, 0xe32, 0x2, 0xecd, 0xeb2, 0x2, 0xeab,
    0xe99, 0x2, 0xeab, 0xea1, 0x1, 0xf0b, 0x2, 0xf42, 0xfb7, 0x2, 0xf4c, 0xfb7,
    0x2, 0xf51, 0xfb7, 0x2, 0xf56, 0xfb7, 0x2, 0xf5b, 0xfb7, 0x2, 0xf40, 0xfb5,
    0x2, 0xf71, 0xf72, 0x2, 0xf71, 0xf74, 0x2, 0xfb2, 0xf80, 0x3, 0xfb2, 0xf71,
    0xf80, 0x2, 0xfb3, 0xf80, 0x3, 0xfb3, 0xf71, 0xf80, 0x2, 0xf71, 0xf80, 0x2,
    0xf92, 0xfb7, 0x2, 0xf9c, 0xfb7, 0x2, 0xfa1, 0xfb7, 0x2, 0xfa6, 0xfb7, 0x2,
    0xfab, 0xfb7, 0x2, 0xf90, 0xfb5, 0x2, 0x1025, 0x102e, 0x1, 0x10dc, 0x2, 0x1b05,
    0x1b35, 0x2, 0x1b07, 0x1b35, 0x2, 0x1b09, 0x1b35, 0x2, 0x1b0b, 0x1b35, 0x2, 0x1b0d,
    0x1b35, 0x2, 0x1b11, 0x1b35, 0x2, 0x1b3a, 0x1b35, 0x2, 0x1b3c, 0x1b35, 0x2, 0x1b3e,
    0x1b35, 0x2, 0x1b3f, 0x1b35, 0x2, 0x1b42, 0x1b35, 0x1, 0x41, 0x1, 0xc6, 0x1,
    0x42, 0x1, 0x44, 0x1, 0x45, 0x1, 0x18e, 0x1, 0x47, 0x1, 0x48, 0x1,
    0x49, 0x1, 0x4a, 0x1, 0x4b, 0x1, 0x4c, 0x1, 0x4d, 0x1, 0x4e, 0x1,
    0x4f, 0x1, 0x222, 0x1, 0x50, 0x1, 0x52, 0x1, 0x54, 0x1, 0x55, 0x1,
    0x57, 0x1, 0x250, 0x1, 0x251, 0x1, 0x1d02, 0x1, 0x62, 0x1, 0x64, 0x1,
    0x65, 0x1, 0x259, 0x1, 0x25b, 0x1, 0x25c, 0x1, 0x67, 0x1, 0x6b, 0x1,
    0x6d, 0x1, 0x14b, 0x1, 0x254, 0x1, 0x1d16, 0x1, 0x1d17, 0x1, 0x70, 0x1,
    0x74, 0x1, 0x75, 0x1, 0x1d1d, 0x1, 0x26f, 0x1, 0x76, 0x1, 0x1d25, 0x1,
    0x3b3, 0x1, 0x3b4, 0x1, 0x3c7, 0x1, 0x69, 0x1, 0x43d, 0x1, 0x252, 0x1,
    0x63, 0x1, 0x255, 0x1, 0xf0, 0x1, 0x66, 0x1, 0x25f, 0x1, 0x261, 0x1,
    0x265, 0x1, 0x268, 0x1, 0x269, 0x1, 0x26a, 0x1, 0x1d7b, 0x1, 0x29d, 0x1,
    0x26d, 0x1, 0x1d85, 0x1, 0x29f, 0x1, 0x271, 0x1, 0x270, 0x1, 0x272, 0x1,
    0x273, 0x1, 0x274, 0x1, 0x275, 0x1, 0x278, 0x1, 0x282, 0x1, 0x283, 0x1,
    0x1ab, 0x1, 0x289, 0x1, 0x28a, 0x1, 0x1d1c, 0x1, 0x28b, 0x1, 0x28c, 0x1,
    0x7a, 0x1, 0x290, 0x1, 0x291, 0x1, 0x292, 0x2, 0x41, 0x325, 0x2, 0x61,
    0x325, 0x2, 0x42, 0x307, 0x2, 0x62, 0x307, 0x2, 0x42, 0x323, 0x2, 0x62,
    0x323, 0x2, 0x42, 0x331, 0x2, 0x62, 0x331, 0x3, 0x43, 0x327, 0x301, 0x3,
    0x63, 0x327, 0x301, 0x2, 0x44, 0x307, 0x2, 0x64, 0x307, 0x2, 0x44, 0x323,
    0x2, 0x64, 0x323, 0x2, 0x44, 0x331, 0x2, 0x64, 0x331, 0x2, 0x44, 0x327,
    0x2, 0x64, 0x327, 0x2, 0x44, 0x32d, 0x2, 0x64, 0x32d, 0x3, 0x45, 0x304,
    0x300, 0x3, 0x65, 0x304, 0x300, 0x3, 0x45, 0x304, 0x301, 0x3, 0x65, 0x304,
    0x301, 0x2, 0x45, 0x32d, 0x2, 0x65, 0x32d, 0x2, 0x45, 0x330, 0x2, 0x65,
    0x330, 0x3, 0x45, 0x327, 0x306, 0x3, 0x65, 0x327, 0x306, 0x2, 0x46, 0x307,
    0x2, 0x66, 0x307, 0x2, 0x47, 0x304, 0x2, 0x67, 0x304, 0x2, 0x48, 0x307,
    0x2, 0x68, 0x307, 0x2, 0x48, 0x323, 0x2, 0x68, 0x323, 0x2, 0x48, 0x308,
    0x2, 0x68, 0x308, 0x2, 0x48, 0x327, 0x2, 0x68, 0x327, 0x2, 0x48, 0x32e,
    0x2, 0x68, 0x32e, 0x2, 0x49, 0x330, 0x2, 0x69, 0x330, 0x3, 0x49, 0x308,
    0x301, 0x3, 0x69, 0x308, 0x301, 0x2, 0x4b, 0x301, 0x2, 0x6b, 0x301, 0x2,
    0x4b, 0x323, 0x2, 0x6b, 0x323, 0x2, 0x4b, 0x331, 0x2, 0x6b, 0x331, 0x2,
    0x4c, 0x323, 0x2, 0x6c, 0x323, 0x3, 0x4c, 0x323, 0x304, 0x3, 0x6c, 0x323,
    0x304, 0x2, 0x4c, 0x331, 0x2, 0x6c, 0x331, 0x2, 0x4c, 0x32d, 0x2, 0x6c,
    0x32d, 0x2, 0x4d, 0x301, 0x2, 0x6d, 0x301, 0x2, 0x4d, 0x307, 0x2, 0x6d,
    0x307, 0x2, 0x4d, 0x323, 0x2, 0x6d, 0x323, 0x2, 0x4e, 0x307, 0x2, 0x6e,
    0x307, 0x2, 0x4e, 0x323, 0x2, 0x6e, 0x323, 0x2, 0x4e, 0x331, 0x2, 0x6e,
    0x331, 0x2, 0x4e, 0x32d, 0x2, 0x6e, 0x32d, 0x3, 0x4f, 0x303, 0x301, 0x3,
    0x6f, 0x303, 0x301, 0x3, 0x4f, 0x303, 0x308, 0x3, 0x6f, 0x303, 0x308, 0x3,
    0x4f, 0x304, 0x300, 0x3, 0x6f, 0x304, 0x300, 0x3, 0x4f, 0x304, 0x301, 0x3,
    0x6f, 0x304, 0x301, 0x2, 0x50, 0x301, 0x2, 0x70, 0x301, 0x2, 0x50, 0x307,
    0x2, 0x70, 0x307, 0x2, 0x52, 0x307, 0x2, 0x72, 0x307, 0x2, 0x52, 0x323,
    0x2, 0x72, 0x323, 0x3, 0x52, 0x323, 0x304, 0x3, 0x72, 0x323, 0x304, 0x2,
    0x52, 0x331, 0x2, 0x72, 0x331, 0x2, 0x53, 0x307, 0x2, 0x73, 0x307, 0x2,
    0x53, 0x323, 0x2, 0x73, 0x323, 0x3, 0x53, 0x301, 0x307, 0x3, 0x73, 0x301,
    0x307, 0x3, 0x53, 0x30c, 0x307, 0x3, 0x73, 0x30c, 0x307, 0x3, 0x53, 0x323,
    0x307, 0x3, 0x73, 0x323, 0x307, 0x2, 0x54, 0x307, 0x2, 0x74, 0x307, 0x2,
    0x54, 0x323, 0x2, 0x74, 0x323, 0x2, 0x54, 0x331, 0x2, 0x74, 0x331, 0x2,
    0x54, 0x32d, 0x2, 0x74, 0x32d, 0x2, 0x55, 0x324, 0x2, 0x75, 0x324, 0x2,
    0x55, 0x330, 0x2, 0x75, 0x330, 0x2, 0x55, 0x32d, 0x2, 0x75, 0x32d, 0x3,
    0x55, 0x303, 0x301, 0x3, 0x75, 0x303, 0x301, 0x3, 0x55, 0x304, 0x308, 0x3,
    0x75, 0x304, 0x308, 0x2, 0x56, 0x303, 0x2, 0x76, 0x303, 0x2, 0x56, 0x323,
    0x2, 0x76, 0x323, 0x2, 0x57, 0x300, 0x2, 0x77, 0x300, 0x2, 0x57, 0x301,
    0x2, 0x77, 0x301, 0x2, 0x57, 0x308, 0x2, 0x77, 0x308, 0x2, 0x57, 0x307,
    0x2, 0x77, 0x307, 0x2, 0x57, 0x323, 0x2, 0x77, 0x323, 0x2, 0x58, 0x307,
    0x2, 0x78, 0x307, 0x2, 0x58, 0x308, 0x2, 0x78, 0x308, 0x2, 0x59, 0x307,
    0x2, 0x79, 0x307, 0x2, 0x5a, 0x302, 0x2, 0x7a, 0x302, 0x2, 0x5a, 0x323,
    0x2, 0x7a, 0x323, 0x2, 0x5a, 0x331, 0x2, 0x7a, 0x331, 0x2, 0x68, 0x331,
    0x2, 0x74, 0x308, 0x2, 0x77, 0x30a, 0x2, 0x79, 0x30a, 0x2, 0x61, 0x2be,
    0x2, 0x17f, 0x307, 0x2, 0x41, 0x323, 0x2, 0x61, 0x323, 0x2, 0x41, 0x309,
    0x2, 0x61, 0x309, 0x3, 0x41, 0x302, 0x301, 0x3, 0x61, 0x302, 0x301, 0x3,
    0x41, 0x302, 0x300, 0x3, 0x61, 0x302, 0x300, 0x3, 0x41, 0x302, 0x309, 0x3,
    0x61, 0x302, 0x309, 0x3, 0x41, 0x302, 0x303, 0x3, 0x61, 0x302, 0x303, 0x3,
    0x41, 0x323, 0x302, 0x3, 0x61, 0x323, 0x302, 0x3, 0x41, 0x306, 0x301, 0x3,
    0x61, 0x306, 0x301, 0x3, 0x41, 0x306, 0x300, 0x3, 0x61, 0x306, 0x300, 0x3,
    0x41, 0x306, 0x309, 0x3, 0x61, 0x306, 0x309, 0x3, 0x41, 0x306, 0x303, 0x3,
    0x61, 0x306, 0x303, 0x3, 0x41, 0x323, 0x306, 0x3, 0x61, 0x323, 0x306, 0x2,
    0x45, 0x323, 0x2, 0x65, 0x323, 0x2, 0x45, 0x309, 0x2, 0x65, 0x309, 0x2,
    0x45, 0x303, 0x2, 0x65, 0x303, 0x3, 0x45, 0x302, 0x301, 0x3, 0x65, 0x302,
    0x301, 0x3, 0x45, 0x302, 0x300, 0x3, 0x65, 0x302, 0x300, 0x3, 0x45, 0x302,
    0x309, 0x3, 0x65, 0x302, 0x309, 0x3, 0x45, 0x302, 0x303, 0x3, 0x65, 0x302,
    0x303, 0x3, 0x45, 0x323, 0x302, 0x3, 0x65, 0x323, 0x302, 0x2, 0x49, 0x309,
    0x2, 0x69, 0x309, 0x2, 0x49, 0x323, 0x2, 0x69, 0x323, 0x2, 0x4f, 0x323,
    0x2, 0x6f, 0x323, 0x2, 0x4f, 0x309, 0x2, 0x6f, 0x309, 0x3, 0x4f, 0x302,
    0x301, 0x3, 0x6f, 0x302, 0x301, 0x3, 0x4f, 0x302, 0x300, 0x3, 0x6f, 0x302,
    0x300, 0x3, 0x4f, 0x302, 0x309, 0x3, 0x6f, 0x302, 0x309, 0x3, 0x4f, 0x302,
    0x303, 0x3, 0x6f, 0x302, 0x303, 0x3, 0x4f, 0x323, 0x302, 0x3, 0x6f, 0x323,
    0x302, 0x3, 0x4f, 0x31b, 0x301, 0x3, 0x6f, 0x31b, 0x301, 0x3, 0x4f, 0x31b,
    0x300, 0x3, 0x6f, 0x31b, 0x300, 0x3, 0x4f, 0x31b, 0x309, 0x3, 0x6f, 0x31b,
    0x309, 0x3, 0x4f, 0x31b, 0x303, 0x3, 0x6f, 0x31b, 0x303, 0x3, 0x4f, 0x31b,
    0x323, 0x3, 0x6f, 0x31b, 0x323, 0x2, 0x55, 0x323, 0x2, 0x75, 0x323, 0x2,
    0x55, 0x309, 0x2, 0x75, 0x309, 0x3, 0x55, 0x31b, 0x301, 0x3, 0x75, 0x31b,
    0x301, 0x3, 0x55, 0x31b, 0x300, 0x3, 0x75, 0x31b, 0x300, 0x3, 0x55, 0x31b,
    0x309, 0x3, 0x75, 0x31b, 0x309, 0x3, 0x55, 0x31b, 0x303, 0x3, 0x75, 0x31b,
    0x303, 0x3, 0x55, 0x31b, 0x323, 0x3, 0x75, 0x31b, 0x323, 0x2, 0x59, 0x300,
    0x2, 0x79, 0x300, 0x2, 0x59, 0x323, 0x2, 0x79, 0x323, 0x2, 0x59, 0x309,
    0x2, 0x79, 0x309, 0x2, 0x59, 0x303, 0x2, 0x79, 0x303, 0x2, 0x3b1, 0x313,
    0x2, 0x3b1, 0x314, 0x3, 0x3b1, 0x313, 0x300, 0x3, 0x3b1, 0x314, 0x300, 0x3,
    0x3b1, 0x313, 0x301, 0x3, 0x3b1, 0x314, 0x301, 0x3, 0x3b1, 0x313, 0x342, 0x3,
    0x3b1, 0x314, 0x342, 0x2, 0x391, 0x313, 0x2, 0x391, 0x314, 0x3, 0x391, 0x313,
    0x300, 0x3, 0x391, 0x314, 0x300, 0x3, 0x391, 0x313, 0x301, 0x3, 0x391, 0x314,
    0x301, 0x3, 0x391, 0x313, 0x342, 0x3, 0x391, 0x314, 0x342, 0x2, 0x3b5, 0x313,
    0x2, 0x3b5, 0x314, 0x3, 0x3b5, 0x313, 0x300, 0x3, 0x3b5, 0x314, 0x300, 0x3,
    0x3b5, 0x313, 0x301, 0x3, 0x3b5, 0x314, 0x301, 0x2, 0x395, 0x313, 0x2, 0x395,
    0x314, 0x3, 0x395, 0x313, 0x300, 0x3, 0x395, 0x314, 0x300, 0x3, 0x395, 0x313,
    0x301, 0x3, 0x395, 0x314, 0x301, 0x2, 0x3b7, 0x313, 0x2, 0x3b7, 0x314, 0x3,
    0x3b7, 0x313, 0x300, 0x3, 0x3b7, 0x314, 0x300, 0x3, 0x3b7, 0x313, 0x301, 0x3,
    0x3b7, 0x314, 0x301, 0x3, 0x3b7, 0x313, 0x342, 0x3, 0x3b7, 0x314, 0x342, 0x2,
    0x397, 0x313, 0x2, 0x397, 0x314, 0x3, 0x397, 0x313, 0x300, 0x3, 0x397, 0x314,
    0x300, 0x3, 0x397, 0x313, 0x301, 0x3, 0x397, 0x314, 0x301, 0x3, 0x397, 0x313,
    0x342, 0x3, 0x397, 0x314, 0x342, 0x2, 0x3b9, 0x313, 0x2, 0x3b9, 0x314, 0x3,
    0x3b9, 0x313, 0x300, 0x3, 0x3b9, 0x314, 0x300, 0x3, 0x3b9, 0x313, 0x301, 0x3,
    0x3b9, 0x314, 0x301, 0x3, 0x3b9, 0x313, 0x342, 0x3, 0x3b9, 0x314, 0x342, 0x2,
    0x399, 0x313, 0x2, 0x399, 0x314, 0x3, 0x399, 0x313, 0x300, 0x3, 0x399, 0x314,
    0x300, 0x3, 0x399, 0x313, 0x301, 0x3, 0x399, 0x314, 0x301, 0x3, 0x399, 0x313,
    0x342, 0x3, 0x399, 0x314, 0x342, 0x2, 0x3bf, 0x313, 0x2, 0x3bf, 0x314, 0x3,
    0x3bf, 0x313, 0x300, 0x3, 0x3bf, 0x314, 0x300, 0x3, 0x3bf, 0x313, 0x301, 0x3,
    0x3bf, 0x314, 0x301, 0x2, 0x39f, 0x313, 0x2, 0x39f, 0x314, 0x3, 0x39f, 0x313,
    0x300, 0x3, 0x39f, 0x314, 0x300, 0x3, 0x39f, 0x313, 0x301, 0x3, 0x39f, 0x314,
    0x301, 0x2, 0x3c5, 0x313, 0x2, 0x3c5, 0x314, 0x3, 0x3c5, 0x313, 0x300, 0x3,
    0x3c5, 0x314, 0x300, 0x3, 0x3c5, 0x313, 0x301, 0x3, 0x3c5, 0x314, 0x301, 0x3,
    0x3c5, 0x313, 0x342, 0x3, 0x3c5, 0x314, 0x342, 0x2, 0x3a5, 0x314, 0x3, 0x3a5,
    0x314, 0x300, 0x3, 0x3a5, 0x314, 0x301, 0x3, 0x3a5, 0x314, 0x342, 0x2, 0x3c9,
    0x313, 0x2, 0x3c9, 0x314, 0x3, 0x3c9, 0x313, 0x300, 0x3, 0x3c9, 0x314, 0x300,
    0x3, 0x3c9, 0x313, 0x301, 0x3, 0x3c9, 0x314, 0x301, 0x3, 0x3c9, 0x313, 0x342,
    0x3, 0x3c9, 0x314, 0x342, 0x2, 0x3a9, 0x313, 0x2, 0x3a9, 0x314, 0x3, 0x3a9,
    0x313, 0x300, 0x3, 0x3a9, 0x314, 0x300, 0x3, 0x3a9, 0x313, 0x301, 0x3, 0x3a9,
    0x314, 0x301, 0x3, 0x3a9, 0x313, 0x342, 0x3, 0x3a9, 0x314, 0x342, 0x2, 0x3b1,
    0x300, 0x2, 0x3b5, 0x300, 0x2, 0x3b7, 0x300, 0x2, 0x3b9, 0x300, 0x2, 0x3bf,
    0x300, 0x2, 0x3c5, 0x300, 0x2, 0x3c9, 0x300, 0x3, 0x3b1, 0x313, 0x345, 0x3,
    0x3b1, 0x314, 0x345, 0x4, 0x3b1, 0x313, 0x300, 0x345, 0x4, 0x3b1, 0x314, 0x300,
    0x345, 0x4, 0x3b1, 0x313, 0x301, 0x345, 0x4, 0x3b1, 0x314, 0x301, 0x345, 0x4,
    0x3b1, 0x313, 0x342, 0x345, 0x4, 0x3b1, 0x314, 0x342, 0x345, 0x3, 0x391, 0x313,
    0x345, 0x3, 0x391, 0x314, 0x345, 0x4, 0x391, 0x313, 0x300, 0x345, 0x4, 0x391,
    0x314, 0x300, 0x345, 0x4, 0x391, 0x313, 0x301, 0x345, 0x4, 0x391, 0x314, 0x301,
    0x345, 0x4, 0x391, 0x313, 0x342, 0x345, 0x4, 0x391, 0x314, 0x342, 0x345, 0x3,
    0x3b7, 0x313, 0x345, 0x3, 0x3b7, 0x314, 0x345, 0x4, 0x3b7, 0x313, 0x300, 0x345,
    0x4, 0x3b7, 0x314, 0x300, 0x345, 0x4, 0x3b7, 0x313, 0x301, 0x345, 0x4, 0x3b7,
    0x314, 0x301, 0x345, 0x4, 0x3b7, 0x313, 0x342, 0x345, 0x4, 0x3b7, 0x314, 0x342,
    0x345, 0x3, 0x397, 0x313, 0x345, 0x3, 0x397, 0x314, 0x345, 0x4, 0x397, 0x313,
    0x300, 0x345, 0x4, 0x397, 0x314, 0x300, 0x345, 0x4, 0x397, 0x313, 0x301, 0x345,
    0x4, 0x397, 0x314, 0x301, 0x345, 0x4, 0x397, 0x313, 0x342, 0x345, 0x4, 0x397,
    0x314, 0x342, 0x345, 0x3, 0x3c9, 0x313, 0x345, 0x3, 0x3c9, 0x314, 0x345, 0x4,
    0x3c9, 0x313, 0x300, 0x345, 0x4, 0x3c9, 0x314, 0x300, 0x345, 0x4, 0x3c9, 0x313,
    0x301, 0x345, 0x4, 0x3c9, 0x314, 0x301, 0x345, 0x4, 0x3c9, 0x313, 0x342, 0x345,
    0x4, 0x3c9, 0x314, 0x342, 0x345, 0x3, 0x3a9, 0x313, 0x345, 0x3, 0x3a9, 0x314,
    0x345, 0x4, 0x3a9, 0x313, 0x300, 0x345, 0x4, 0x3a9, 0x314, 0x300, 0x345, 0x4,
    0x3a9, 0x313, 0x301, 0x345, 0x4, 0x3a9, 0x314, 0x301, 0x345, 0x4, 0x3a9, 0x313,
    0x342, 0x345, 0x4, 0x3a9, 0x314, 0x342, 0x345, 0x2, 0x3b1, 0x306, 0x2, 0x3b1,
    0x304, 0x3, 0x3b1, 0x300, 0x345, 0x2, 0x3b1, 0x345, 0x3, 0x3b1, 0x301, 0x345,
    0x2, 0x3b1, 0x342, 0x3, 0x3b1, 0x342, 0x345, 0x2, 0x391, 0x306, 0x2, 0x391,
    0x304, 0x2, 0x391, 0x300, 0x2, 0x391, 0x345, 0x2, 0x20, 0x313, 0x1, 0x3b9,
    0x2, 0x20, 0x342, 0x2, 0xa8, 0x342, 0x3, 0x20, 0x308, 0x342, 0x3, 0x3b7,
    0x300, 0x345, 0x2, 0x3b7, 0x345, 0x3, 0x3b7, 0x301, 0x345, 0x2, 0x3b7, 0x342,
    0x3, 0x3b7, 0x342, 0x345, 0x2, 0x395, 0x300, 0x2, 0x397, 0x300, 0x2, 0x397,
    0x345, 0x2, 0x1fbf, 0x300, 0x3, 0x20, 0x313, 0x300, 0x2, 0x1fbf, 0x301, 0x3,
    0x20, 0x313, 0x301, 0x2, 0x1fbf, 0x342, 0x3, 0x20, 0x313, 0x342, 0x2, 0x3b9,
    0x306, 0x2, 0x3b9, 0x304, 0x3, 0x3b9, 0x308, 0x300, 0x2, 0x3b9, 0x342, 0x3,
    0x3b9, 0x308, 0x342, 0x2, 0x399, 0x306, 0x2, 0x399, 0x304, 0x2, 0x399, 0x300,
    0x2, 0x1ffe, 0x300, 0x3, 0x20, 0x314, 0x300, 0x2, 0x1ffe, 0x301, 0x3, 0x20,
    0x314, 0x301, 0x2, 0x1ffe, 0x342, 0x3, 0x20, 0x314, 0x342, 0x2, 0x3c5, 0x306,
    0x2, 0x3c5, 0x304, 0x3, 0x3c5, 0x308, 0x300, 0x2, 0x3c1, 0x313, 0x2, 0x3c1,
    0x314, 0x2, 0x3c5, 0x342, 0x3, 0x3c5, 0x308, 0x342, 0x2, 0x3a5, 0x306, 0x2,
    0x3a5, 0x304, 0x2, 0x3a5, 0x300, 0x2, 0x3a1, 0x314, 0x2, 0xa8, 0x300, 0x3,
    0x20, 0x308, 0x300, 0x1, 0x60, 0x3, 0x3c9, 0x300, 0x345, 0x2, 0x3c9, 0x345,
    0x3, 0x3c9, 0x301, 0x345, 0x2, 0x3c9, 0x342, 0x3, 0x3c9, 0x342, 0x345, 0x2,
    0x39f, 0x300, 0x2, 0x3a9, 0x300, 0x2, 0x3a9, 0x345, 0x1, 0xb4, 0x2, 0x20,
    0x314, 0x1, 0x2002, 0x1, 0x2003, 0x1, 0x2010, 0x2, 0x20, 0x333, 0x1, 0x2e,
    0x2, 0x2e, 0x2e, 0x3, 0x2e, 0x2e, 0x2e, 0x2, 0x2032, 0x2032, 0x3, 0x2032,
    0x2032, 0x2032, 0x2, 0x2035, 0x2035, 0x3, 0x2035, 0x2035, 0x2035, 0x2, 0x21, 0x21,
    0x2, 0x20, 0x305, 0x2, 0x3f, 0x3f, 0x2, 0x3f, 0x21, 0x2, 0x21, 0x3f,
    0x4, 0x2032, 0x2032, 0x2032, 0x2032, 0x1, 0x30, 0x1, 0x34, 0x1, 0x35, 0x1,
    0x36, 0x1, 0x37, 0x1, 0x38, 0x1, 0x39, 0x1, 0x2b, 0x1, 0x2212, 0x1,
    0x3d, 0x1, 0x28, 0x1, 0x29, 0x1, 0x6e, 0x2, 0x52, 0x73, 0x3, 0x61,
    0x2f, 0x63, 0x3, 0x61, 0x2f, 0x73, 0x1, 0x43, 0x2, 0xb0, 0x43, 0x3,
    0x63, 0x2f, 0x6f, 0x3, 0x63, 0x2f, 0x75, 0x1, 0x190, 0x2, 0xb0, 0x46,
    0x1, 0x127, 0x2, 0x4e, 0x6f, 0x1, 0x51, 0x2, 0x53, 0x4d, 0x3, 0x54,
    0x45, 0x4c, 0x2, 0x54, 0x4d, 0x1, 0x5a, 0x1, 0x3a9, 0x1, 0x46, 0x1,
    0x5d0, 0x1, 0x5d1, 0x1, 0x5d2, 0x1, 0x5d3, 0x3, 0x46, 0x41, 0x58, 0x1,
    0x393, 0x1, 0x3a0, 0x1, 0x2211, 0x3, 0x31, 0x2044, 0x37, 0x3, 0x31, 0x2044,
    0x39, 0x4, 0x31, 0x2044, 0x31, 0x30, 0x3, 0x31, 0x2044, 0x33, 0x3, 0x32,
    0x2044, 0x33, 0x3, 0x31, 0x2044, 0x35, 0x3, 0x32, 0x2044, 0x35, 0x3, 0x33,
    0x2044, 0x35, 0x3, 0x34, 0x2044, 0x35, 0x3, 0x31, 0x2044, 0x36, 0x3, 0x35,
    0x2044, 0x36, 0x3, 0x31, 0x2044, 0x38, 0x3, 0x33, 0x2044, 0x38, 0x3, 0x35,
    0x2044, 0x38, 0x3, 0x37, 0x2044, 0x38, 0x2, 0x31, 0x2044, 0x2, 0x49, 0x49,
    0x3, 0x49, 0x49, 0x49, 0x2, 0x49, 0x56, 0x1, 0x56, 0x2, 0x56, 0x49,
    0x3, 0x56, 0x49, 0x49, 0x4, 0x56, 0x49, 0x49, 0x49, 0x2, 0x49, 0x58,
    0x1, 0x58, 0x2, 0x58, 0x49, 0x3, 0x58, 0x49, 0x49, 0x2, 0x69, 0x69,
    0x3, 0x69, 0x69, 0x69, 0x2, 0x69, 0x76, 0x2, 0x76, 0x69, 0x3, 0x76,
    0x69, 0x69, 0x4, 0x76, 0x69, 0x69, 0x69, 0x2, 0x69, 0x78, 0x2, 0x78,
    0x69, 0x3, 0x78, 0x69, 0x69, 0x3, 0x30, 0x2044, 0x33, 0x2, 0x2190, 0x338,
    0x2, 0x2192, 0x338, 0x2, 0x2194, 0x338, 0x2, 0x21d0, 0x338, 0x2, 0x21d4, 0x338,
    0x2, 0x21d2, 0x338, 0x2, 0x2203, 0x338, 0x2, 0x2208, 0x338, 0x2, 0x220b, 0x338,
    0x2, 0x2223, 0x338, 0x2, 0x2225, 0x338, 0x2, 0x222b, 0x222b, 0x3, 0x222b, 0x222b,
    0x222b, 0x2, 0x222e, 0x222e, 0x3, 0x222e, 0x222e, 0x222e, 0x2, 0x223c, 0x338, 0x2,
    0x2243, 0x338, 0x2, 0x2245, 0x338, 0x2, 0x2248, 0x338, 0x2, 0x3d, 0x338, 0x2,
    0x2261, 0x338, 0x2, 0x224d, 0x338, 0x2, 0x3c, 0x338, 0x2, 0x3e, 0x338, 0x2,
    0x2264, 0x338, 0x2, 0x2265, 0x338, 0x2, 0x2272, 0x338, 0x2, 0x2273, 0x338, 0x2,
    0x2276, 0x338, 0x2, 0x2277, 0x338, 0x2, 0x227a, 0x338, 0x2, 0x227b, 0x338, 0x2,
    0x2282, 0x338, 0x2, 0x2283, 0x338, 0x2, 0x2286, 0x338, 0x2, 0x2287, 0x338, 0x2,
    0x22a2, 0x338, 0x2, 0x22a8, 0x338, 0x2, 0x22a9, 0x338, 0x2, 0x22ab, 0x338, 0x2,
    0x227c, 0x338, 0x2, 0x227d, 0x338, 0x2, 0x2291, 0x338, 0x2, 0x2292, 0x338, 0x2,
    0x22b2, 0x338, 0x2, 0x22b3, 0x338, 0x2, 0x22b4, 0x338, 0x2, 0x22b5, 0x338, 0x1,
    0x3008, 0x1, 0x3009, 0x2, 0x31, 0x30, 0x2, 0x31, 0x31, 0x2, 0x31, 0x32,
    0x2, 0x31, 0x33, 0x2, 0x31, 0x34, 0x2, 0x31, 0x35, 0x2, 0x31, 0x36,
    0x2, 0x31, 0x37, 0x2, 0x31, 0x38, 0x2, 0x31, 0x39, 0x2, 0x32, 0x30,
    0x3, 0x28, 0x31, 0x29, 0x3, 0x28, 0x32, 0x29, 0x3, 0x28, 0x33, 0x29,
    0x3, 0x28, 0x34, 0x29, 0x3, 0x28, 0x35, 0x29, 0x3, 0x28, 0x36, 0x29,
    0x3, 0x28, 0x37, 0x29, 0x3, 0x28, 0x38, 0x29, 0x3, 0x28, 0x39, 0x29,
    0x4, 0x28, 0x31, 0x30, 0x29, 0x4, 0x28, 0x31, 0x31, 0x29, 0x4, 0x28,
    0x31, 0x32, 0x29, 0x4, 0x28, 0x31, 0x33, 0x29, 0x4, 0x28, 0x31, 0x34,
    0x29, 0x4, 0x28, 0x31, 0x35, 0x29, 0x4, 0x28, 0x31, 0x36, 0x29, 0x4,
    0x28, 0x31, 0x37, 0x29, 0x4, 0x28, 0x31, 0x38, 0x29, 0x4, 0x28, 0x31,
    0x39, 0x29, 0x4, 0x28, 0x32, 0x30, 0x29, 0x2, 0x31, 0x2e, 0x2, 0x32,
    0x2e, 0x2, 0x33, 0x2e, 0x2, 0x34, 0x2e, 0x2, 0x35, 0x2e, 0x2, 0x36,
    0x2e, 0x2, 0x37, 0x2e, 0x2, 0x38, 0x2e, 0x2, 0x39, 0x2e, 0x3, 0x31,
    0x30, 0x2e, 0x3, 0x31, 0x31, 0x2e, 0x3, 0x31, 0x32, 0x2e, 0x3, 0x31,
    0x33, 0x2e, 0x3, 0x31, 0x34, 0x2e, 0x3, 0x31, 0x35, 0x2e, 0x3, 0x31,
    0x36, 0x2e, 0x3, 0x31, 0x37, 0x2e, 0x3, 0x31, 0x38, 0x2e, 0x3, 0x31,
    0x39, 0x2e, 0x3, 0x32, 0x30, 0x2e, 0x3, 0x28, 0x61, 0x29, 0x3, 0x28,
    0x62, 0x29, 0x3, 0x28, 0x63, 0x29, 0x3, 0x28, 0x64, 0x29, 0x3, 0x28,
    0x65, 0x29, 0x3, 0x28, 0x66, 0x29, 0x3, 0x28, 0x67, 0x29, 0x3, 0x28,
    0x68, 0x29, 0x3, 0x28, 0x69, 0x29, 0x3, 0x28, 0x6a, 0x29, 0x3, 0x28,
    0x6b, 0x29, 0x3, 0x28, 0x6c, 0x29, 0x3, 0x28, 0x6d, 0x29, 0x3, 0x28,
    0x6e, 0x29, 0x3, 0x28, 0x6f, 0x29, 0x3, 0x28, 0x70, 0x29, 0x3, 0x28,
    0x71, 0x29, 0x3, 0x28, 0x72, 0x29, 0x3, 0x28, 0x73, 0x29, 0x3, 0x28,
    0x74, 0x29, 0x3, 0x28, 0x75, 0x29, 0x3, 0x28, 0x76, 0x29, 0x3, 0x28,
    0x77, 0x29, 0x3, 0x28, 0x78, 0x29, 0x3, 0x28, 0x79, 0x29, 0x3, 0x28,
    0x7a, 0x29, 0x1, 0x53, 0x1, 0x59, 0x1, 0x71, 0x4, 0x222b, 0x222b, 0x222b,
    0x222b, 0x3, 0x3a, 0x3a, 0x3d, 0x2, 0x3d, 0x3d, 0x3, 0x3d, 0x3d, 0x3d,
    0x2, 0x2add, 0x338, 0x1, 0x2d61, 0x1, 0x6bcd, 0x1, 0x9f9f, 0x1, 0x4e00, 0x1,
    0x4e28, 0x1, 0x4e36, 0x1, 0x4e3f, 0x1, 0x4e59, 0x1, 0x4e85, 0x1, 0x4e8c, 0x1,
    0x4ea0, 0x1, 0x4eba, 0x1, 0x513f, 0x1, 0x5165, 0x1, 0x516b, 0x1, 0x5182, 0x1,
    0x5196, 0x1, 0x51ab, 0x1, 0x51e0, 0x1, 0x51f5, 0x1, 0x5200, 0x1, 0x529b, 0x1,
    0x52f9, 0x1, 0x5315, 0x1, 0x531a, 0x1, 0x5338, 0x1, 0x5341, 0x1, 0x535c, 0x1,
    0x5369, 0x1, 0x5382, 0x1, 0x53b6, 0x1, 0x53c8, 0x1, 0x53e3, 0x1, 0x56d7, 0x1,
    0x571f, 0x1, 0x58eb, 0x1, 0x5902, 0x1, 0x590a, 0x1, 0x5915, 0x1, 0x5927, 0x1,
    0x5973, 0x1, 0x5b50, 0x1, 0x5b80, 0x1, 0x5bf8, 0x1, 0x5c0f, 0x1, 0x5c22, 0x1,
    0x5c38, 0x1, 0x5c6e, 0x1, 0x5c71, 0x1, 0x5ddb, 0x1, 0x5de5, 0x1, 0x5df1, 0x1,
    0x5dfe, 0x1, 0x5e72, 0x1, 0x5e7a, 0x1, 0x5e7f, 0x1, 0x5ef4, 0x1, 0x5efe, 0x1,
    0x5f0b, 0x1, 0x5f13, 0x1, 0x5f50, 0x1, 0x5f61, 0x1, 0x5f73, 0x1, 0x5fc3, 0x1,
    0x6208, 0x1, 0x6236, 0x1, 0x624b, 0x1, 0x652f, 0x1, 0x6534, 0x1, 0x6587, 0x1,
    0x6597, 0x1, 0x65a4, 0x1, 0x65b9, 0x1, 0x65e0, 0x1, 0x65e5, 0x1, 0x66f0, 0x1,
    0x6708, 0x1, 0x6728, 0x1, 0x6b20, 0x1, 0x6b62, 0x1, 0x6b79, 0x1, 0x6bb3, 0x1,
    0x6bcb, 0x1, 0x6bd4, 0x1, 0x6bdb, 0x1, 0x6c0f, 0x1, 0x6c14, 0x1, 0x6c34, 0x1,
    0x706b, 0x1, 0x722a, 0x1, 0x7236, 0x1, 0x723b, 0x1, 0x723f, 0x1, 0x7247, 0x1,
    0x7259, 0x1, 0x725b, 0x1, 0x72ac, 0x1, 0x7384, 0x1, 0x7389, 0x1, 0x74dc, 0x1,
    0x74e6, 0x1, 0x7518, 0x1, 0x751f, 0x1, 0x7528, 0x1, 0x7530, 0x1, 0x758b, 0x1,
    0x7592, 0x1, 0x7676, 0x1, 0x767d, 0x1, 0x76ae, 0x1, 0x76bf, 0x1, 0x76ee, 0x1,
    0x77db, 0x1, 0x77e2, 0x1, 0x77f3, 0x1, 0x793a, 0x1, 0x79b8, 0x1, 0x79be, 0x1,
    0x7a74, 0x1, 0x7acb, 0x1, 0x7af9, 0x1, 0x7c73, 0x1, 0x7cf8, 0x1, 0x7f36, 0x1,
    0x7f51, 0x1, 0x7f8a, 0x1, 0x7fbd, 0x1, 0x8001, 0x1, 0x800c, 0x1, 0x8012, 0x1,
    0x8033, 0x1, 0x807f, 0x1, 0x8089, 0x1, 0x81e3, 0x1, 0x81ea, 0x1, 0x81f3, 0x1,
    0x81fc, 0x1, 0x820c, 0x1, 0x821b, 0x1, 0x821f, 0x1, 0x826e, 0x1, 0x8272, 0x1,
    0x8278, 0x1, 0x864d, 0x1, 0x866b, 0x1, 0x8840, 0x1, 0x884c, 0x1, 0x8863, 0x1,
    0x897e, 0x1, 0x898b, 0x1, 0x89d2, 0x1, 0x8a00, 0x1, 0x8c37, 0x1, 0x8c46, 0x1,
    0x8c55, 0x1, 0x8c78, 0x1, 0x8c9d, 0x1, 0x8d64, 0x1, 0x8d70, 0x1, 0x8db3, 0x1,
    0x8eab, 0x1, 0x8eca, 0x1, 0x8f9b, 0x1, 0x8fb0, 0x1, 0x8fb5, 0x1, 0x9091, 0x1,
    0x9149, 0x1, 0x91c6, 0x1, 0x91cc, 0x1, 0x91d1, 0x1, 0x9577, 0x1, 0x9580, 0x1,
    0x961c, 0x1, 0x96b6, 0x1, 0x96b9, 0x1, 0x96e8, 0x1, 0x9751, 0x1, 0x975e, 0x1,
    0x9762, 0x1, 0x9769, 0x1, 0x97cb, 0x1, 0x97ed, 0x1, 0x97f3, 0x1, 0x9801, 0x1,
    0x98a8, 0x1, 0x98db, 0x1, 0x98df, 0x1, 0x9996, 0x1, 0x9999, 0x1, 0x99ac, 0x1,
    0x9aa8, 0x1, 0x9ad8, 0x1, 0x9adf, 0x1, 0x9b25, 0x1, 0x9b2f, 0x1, 0x9b32, 0x1,
    0x9b3c, 0x1, 0x9b5a, 0x1, 0x9ce5, 0x1, 0x9e75, 0x1, 0x9e7f, 0x1, 0x9ea5, 0x1,
    0x9ebb, 0x1, 0x9ec3, 0x1, 0x9ecd, 0x1, 0x9ed1, 0x1, 0x9ef9, 0x1, 0x9efd, 0x1,
    0x9f0e, 0x1, 0x9f13, 0x1, 0x9f20, 0x1, 0x9f3b, 0x1, 0x9f4a, 0x1, 0x9f52, 0x1,
    0x9f8d, 0x1, 0x9f9c, 0x1, 0x9fa0, 0x1, 0x3012, 0x1, 0x5344, 0x1, 0x5345, 0x2,
    0x304b, 0x3099, 0x2, 0x304d, 0x3099, 0x2, 0x304f, 0x3099, 0x2, 0x3051, 0x3099, 0x2,
    0x3053, 0x3099, 0x2, 0x3055, 0x3099, 0x2, 0x3057, 0x3099, 0x2, 0x3059, 0x3099, 0x2,
    0x305b, 0x3099, 0x2, 0x305d, 0x3099, 0x2, 0x305f, 0x3099, 0x2, 0x3061, 0x3099, 0x2,
    0x3064, 0x3099, 0x2, 0x3066, 0x3099, 0x2, 0x3068, 0x3099, 0x2, 0x306f, 0x3099, 0x2,
    0x306f, 0x309a, 0x2, 0x3072, 0x3099, 0x2, 0x3072, 0x309a, 0x2, 0x3075, 0x3099, 0x2,
    0x3075, 0x309a, 0x2, 0x3078, 0x3099, 0x2, 0x3078, 0x309a, 0x2, 0x307b, 0x3099, 0x2,
    0x307b, 0x309a, 0x2, 0x3046, 0x3099, 0x2, 0x20, 0x3099, 0x2, 0x20, 0x309a, 0x2,
    0x309d, 0x3099, 0x2, 0x3088, 0x308a, 0x2, 0x30ab, 0x3099, 0x2, 0x30ad, 0x3099, 0x2,
    0x30af, 0x3099, 0x2, 0x30b1, 0x3099, 0x2, 0x30b3, 0x3099, 0x2, 0x30b5, 0x3099, 0x2,
    0x30b7, 0x3099, 0x2, 0x30b9, 0x3099, 0x2, 0x30bb, 0x3099, 0x2, 0x30bd, 0x3099, 0x2,
    0x30bf, 0x3099, 0x2, 0x30c1, 0x3099, 0x2, 0x30c4, 0x3099, 0x2, 0x30c6, 0x3099, 0x2,
    0x30c8, 0x3099, 0x2, 0x30cf, 0x3099, 0x2, 0x30cf, 0x309a, 0x2, 0x30d2, 0x3099, 0x2,
    0x30d2, 0x309a, 0x2, 0x30d5, 0x3099, 0x2, 0x30d5, 0x309a, 0x2, 0x30d8, 0x3099, 0x2,
    0x30d8, 0x309a, 0x2, 0x30db, 0x3099, 0x2, 0x30db, 0x309a, 0x2, 0x30a6, 0x3099, 0x2,
    0x30ef, 0x3099, 0x2, 0x30f0, 0x3099, 0x2, 0x30f1, 0x3099, 0x2, 0x30f2, 0x3099, 0x2,
    0x30fd, 0x3099, 0x2, 0x30b3, 0x30c8, 0x1, 0x1100, 0x1, 0x1101, 0x1, 0x11aa, 0x1,
    0x1102, 0x1, 0x11ac, 0x1, 0x11ad, 0x1, 0x1103, 0x1, 0x1104, 0x1, 0x1105, 0x1,
    0x11b0, 0x1, 0x11b1, 0x1, 0x11b2, 0x1, 0x11b3, 0x1, 0x11b4, 0x1, 0x11b5, 0x1,
    0x111a, 0x1, 0x1106, 0x1, 0x1107, 0x1, 0x1108, 0x1, 0x1121, 0x1, 0x1109, 0x1,
    0x110a, 0x1, 0x110b, 0x1, 0x110c, 0x1, 0x110d, 0x1, 0x110e, 0x1, 0x110f, 0x1,
    0x1110, 0x1, 0x1111, 0x1, 0x1112, 0x1, 0x1161, 0x1, 0x1162, 0x1, 0x1163, 0x1,
    0x1164, 0x1, 0x1165, 0x1, 0x1166, 0x1, 0x1167, 0x1, 0x1168, 0x1, 0x1169, 0x1,
    0x116a, 0x1, 0x116b, 0x1, 0x116c, 0x1, 0x116d, 0x1, 0x116e, 0x1, 0x116f, 0x1,
    0x1170, 0x1, 0x1171, 0x1, 0x1172, 0x1, 0x1173, 0x1, 0x1174, 0x1, 0x1175, 0x1,
    0x1160, 0x1, 0x1114, 0x1, 0x1115, 0x1, 0x11c7, 0x1, 0x11c8, 0x1, 0x11cc, 0x1,
    0x11ce, 0x1, 0x11d3, 0x1, 0x11d7, 0x1, 0x11d9, 0x1, 0x111c, 0x1, 0x11dd, 0x1,
    0x11df, 0x1, 0x111d, 0x1, 0x111e, 0x1, 0x1120, 0x1, 0x1122, 0x1, 0x1123, 0x1,
    0x1127, 0x1, 0x1129, 0x1, 0x112b, 0x1, 0x112c, 0x1, 0x112d, 0x1, 0x112e, 0x1,
    0x112f, 0x1, 0x1132, 0x1, 0x1136, 0x1, 0x1140, 0x1, 0x1147, 0x1, 0x114c, 0x1,
    0x11f1, 0x1, 0x11f2, 0x1, 0x1157, 0x1, 0x1158, 0x1, 0x1159, 0x1, 0x1184, 0x1,
    0x1185, 0x1, 0x1188, 0x1, 0x1191, 0x1, 0x1192, 0x1, 0x1194, 0x1, 0x119e, 0x1,
    0x11a1, 0x1, 0x4e09, 0x1, 0x56db, 0x1, 0x4e0a, 0x1, 0x4e2d, 0x1, 0x4e0b, 0x1,
    0x7532, 0x1, 0x4e19, 0x1, 0x4e01, 0x1, 0x5929, 0x1, 0x5730, 0x3, 0x28, 0x1100,
    0x29, 0x3, 0x28, 0x1102, 0x29, 0x3, 0x28, 0x1103, 0x29, 0x3, 0x28, 0x1105,
    0x29, 0x3, 0x28, 0x1106, 0x29, 0x3, 0x28, 0x1107, 0x29, 0x3, 0x28, 0x1109,
    0x29, 0x3, 0x28, 0x110b, 0x29, 0x3, 0x28, 0x110c, 0x29, 0x3, 0x28, 0x110e,
    0x29, 0x3, 0x28, 0x110f, 0x29, 0x3, 0x28, 0x1110, 0x29, 0x3, 0x28, 0x1111,
    0x29, 0x3, 0x28, 0x1112, 0x29, 0x4, 0x28, 0x1100, 0x1161, 0x29, 0x4, 0x28,
    0x1102, 0x1161, 0x29, 0x4, 0x28, 0x1103, 0x1161, 0x29, 0x4, 0x28, 0x1105, 0x1161,
    0x29, 0x4, 0x28, 0x1106, 0x1161, 0x29, 0x4, 0x28, 0x1107, 0x1161, 0x29, 0x4,
    0x28, 0x1109, 0x1161, 0x29, 0x4, 0x28, 0x110b, 0x1161, 0x29, 0x4, 0x28, 0x110c,
    0x1161, 0x29, 0x4, 0x28, 0x110e, 0x1161, 0x29, 0x4, 0x28, 0x110f, 0x1161, 0x29,
    0x4, 0x28, 0x1110, 0x1161, 0x29, 0x4, 0x28, 0x1111, 0x1161, 0x29, 0x4, 0x28,
    0x1112, 0x1161, 0x29, 0x4, 0x28, 0x110c, 0x116e, 0x29, 0x7, 0x28, 0x110b, 0x1169,
    0x110c, 0x1165, 0x11ab, 0x29, 0x6, 0x28, 0x110b, 0x1169, 0x1112, 0x116e, 0x29, 0x3,
    0x28, 0x4e00, 0x29, 0x3, 0x28, 0x4e8c, 0x29, 0x3, 0x28, 0x4e09, 0x29, 0x3,
    0x28, 0x56db, 0x29, 0x3, 0x28, 0x4e94, 0x29, 0x3, 0x28, 0x516d, 0x29, 0x3,
    0x28, 0x4e03, 0x29, 0x3, 0x28, 0x516b, 0x29, 0x3, 0x28, 0x4e5d, 0x29, 0x3,
    0x28, 0x5341, 0x29, 0x3, 0x28, 0x6708, 0x29, 0x3, 0x28, 0x706b, 0x29, 0x3,
    0x28, 0x6c34, 0x29, 0x3, 0x28, 0x6728, 0x29, 0x3, 0x28, 0x91d1, 0x29, 0x3,
    0x28, 0x571f, 0x29, 0x3, 0x28, 0x65e5, 0x29, 0x3, 0x28, 0x682a, 0x29, 0x3,
    0x28, 0x6709, 0x29, 0x3, 0x28, 0x793e, 0x29, 0x3, 0x28, 0x540d, 0x29, 0x3,
    0x28, 0x7279, 0x29, 0x3, 0x28, 0x8ca1, 0x29, 0x3, 0x28, 0x795d, 0x29, 0x3,
    0x28, 0x52b4, 0x29, 0x3, 0x28, 0x4ee3, 0x29, 0x3, 0x28, 0x547c, 0x29, 0x3,
    0x28, 0x5b66, 0x29, 0x3, 0x28, 0x76e3, 0x29, 0x3, 0x28, 0x4f01, 0x29, 0x3,
    0x28, 0x8cc7, 0x29, 0x3, 0x28, 0x5354, 0x29, 0x3, 0x28, 0x796d, 0x29, 0x3,
    0x28, 0x4f11, 0x29, 0x3, 0x28, 0x81ea, 0x29, 0x3, 0x28, 0x81f3, 0x29, 0x1,
    0x554f, 0x1, 0x5e7c, 0x1, 0x7b8f, 0x3, 0x50, 0x54, 0x45, 0x2, 0x32, 0x31,
    0x2, 0x32, 0x32, 0x2, 0x32, 0x33, 0x2, 0x32, 0x34, 0x2, 0x32, 0x35,
    0x2, 0x32, 0x36, 0x2, 0x32, 0x37, 0x2, 0x32, 0x38, 0x2, 0x32, 0x39,
    0x2, 0x33, 0x30, 0x2, 0x33, 0x31, 0x2, 0x33, 0x32, 0x2, 0x33, 0x33,
    0x2, 0x33, 0x34, 0x2, 0x33, 0x35, 0x2, 0x1100, 0x1161, 0x2, 0x1102, 0x1161,
    0x2, 0x1103, 0x1161, 0x2, 0x1105, 0x1161, 0x2, 0x1106, 0x1161, 0x2, 0x1107, 0x1161,
    0x2, 0x1109, 0x1161, 0x2, 0x110b, 0x1161, 0x2, 0x110c, 0x1161, 0x2, 0x110e, 0x1161,
    0x2, 0x110f, 0x1161, 0x2, 0x1110, 0x1161, 0x2, 0x1111, 0x1161, 0x2, 0x1112, 0x1161,
    0x5, 0x110e, 0x1161, 0x11b7, 0x1100, 0x1169, 0x4, 0x110c, 0x116e, 0x110b, 0x1174, 0x2,
    0x110b, 0x116e, 0x1, 0x4e94, 0x1, 0x516d, 0x1, 0x4e03, 0x1, 0x4e5d, 0x1, 0x682a,
    0x1, 0x6709, 0x1, 0x793e, 0x1, 0x540d, 0x1, 0x7279, 0x1, 0x8ca1, 0x1, 0x795d,
    0x1, 0x52b4, 0x1, 0x79d8, 0x1, 0x7537, 0x1, 0x9069, 0x1, 0x512a, 0x1, 0x5370,
    0x1, 0x6ce8, 0x1, 0x9805, 0x1, 0x4f11, 0x1, 0x5199, 0x1, 0x6b63, 0x1, 0x5de6,
    0x1, 0x53f3, 0x1, 0x533b, 0x1, 0x5b97, 0x1, 0x5b66, 0x1, 0x76e3, 0x1, 0x4f01,
    0x1, 0x8cc7, 0x1, 0x5354, 0x1, 0x591c, 0x2, 0x33, 0x36, 0x2, 0x33, 0x37,
    0x2, 0x33, 0x38, 0x2, 0x33, 0x39, 0x2, 0x34, 0x30, 0x2, 0x34, 0x31,
    0x2, 0x34, 0x32, 0x2, 0x34, 0x33, 0x2, 0x34, 0x34, 0x2, 0x34, 0x35,
    0x2, 0x34, 0x36, 0x2, 0x34, 0x37, 0x2, 0x34, 0x38, 0x2, 0x34, 0x39,
    0x2, 0x35, 0x30, 0x2, 0x31, 0x6708, 0x2, 0x32, 0x6708, 0x2, 0x33, 0x6708,
    0x2, 0x34, 0x6708, 0x2, 0x35, 0x6708, 0x2, 0x36, 0x6708, 0x2, 0x37, 0x6708,
    0x2, 0x38, 0x6708, 0x2, 0x39, 0x6708, 0x3, 0x31, 0x30, 0x6708, 0x3, 0x31,
    0x31, 0x6708, 0x3, 0x31, 0x32, 0x6708, 0x2, 0x48, 0x67, 0x3, 0x65, 0x72,
    0x67, 0x2, 0x65, 0x56, 0x3, 0x4c, 0x54, 0x44, 0x1, 0x30a2, 0x1, 0x30a4,
    0x1, 0x30a6, 0x1, 0x30a8, 0x1, 0x30aa, 0x1, 0x30ab, 0x1, 0x30ad, 0x1, 0x30af,
    0x1, 0x30b1, 0x1, 0x30b3, 0x1, 0x30b5, 0x1, 0x30b7, 0x1, 0x30b9, 0x1, 0x30bb,
    0x1, 0x30bd, 0x1, 0x30bf, 0x1, 0x30c1, 0x1, 0x30c4, 0x1, 0x30c6, 0x1, 0x30c8,
    0x1, 0x30ca, 0x1, 0x30cb, 0x1, 0x30cc, 0x1, 0x30cd, 0x1, 0x30ce, 0x1, 0x30cf,
    0x1, 0x30d2, 0x1, 0x30d5, 0x1, 0x30d8, 0x1, 0x30db, 0x1, 0x30de, 0x1, 0x30df,
    0x1, 0x30e0, 0x1, 0x30e1, 0x1, 0x30e2, 0x1, 0x30e4, 0x1, 0x30e6, 0x1, 0x30e8,
    0x1, 0x30e9, 0x1, 0x30ea, 0x1, 0x30eb, 0x1, 0x30ec, 0x1, 0x30ed, 0x1, 0x30ef,
    0x1, 0x30f0, 0x1, 0x30f1, 0x1, 0x30f2, 0x2, 0x4ee4, 0x548c, 0x5, 0x30a2, 0x30cf,
    0x309a, 0x30fc, 0x30c8, 0x4, 0x30a2, 0x30eb, 0x30d5, 0x30a1, 0x5, 0x30a2, 0x30f3, 0x30d8,
    0x309a, 0x30a2, 0x3, 0x30a2, 0x30fc, 0x30eb, 0x5, 0x30a4, 0x30cb, 0x30f3, 0x30af, 0x3099,
    0x3, 0x30a4, 0x30f3, 0x30c1, 0x3, 0x30a6, 0x30a9, 0x30f3, 0x6, 0x30a8, 0x30b9, 0x30af,
    0x30fc, 0x30c8, 0x3099, 0x4, 0x30a8, 0x30fc, 0x30ab, 0x30fc, 0x3, 0x30aa, 0x30f3, 0x30b9,
    0x3, 0x30aa, 0x30fc, 0x30e0, 0x3, 0x30ab, 0x30a4, 0x30ea, 0x4, 0x30ab, 0x30e9, 0x30c3,
    0x30c8, 0x4, 0x30ab, 0x30ed, 0x30ea, 0x30fc, 0x4, 0x30ab, 0x3099, 0x30ed, 0x30f3, 0x4,
    0x30ab, 0x3099, 0x30f3, 0x30de, 0x4, 0x30ad, 0x3099, 0x30ab, 0x3099, 0x4, 0x30ad, 0x3099,
    0x30cb, 0x30fc, 0x4, 0x30ad, 0x30e5, 0x30ea, 0x30fc, 0x6, 0x30ad, 0x3099, 0x30eb, 0x30bf,
    0x3099, 0x30fc, 0x2, 0x30ad, 0x30ed, 0x6, 0x30ad, 0x30ed, 0x30af, 0x3099, 0x30e9, 0x30e0,
    0x6, 0x30ad, 0x30ed, 0x30e1, 0x30fc, 0x30c8, 0x30eb, 0x5, 0x30ad, 0x30ed, 0x30ef, 0x30c3,
    0x30c8, 0x4, 0x30af, 0x3099, 0x30e9, 0x30e0, 0x6, 0x30af, 0x3099, 0x30e9, 0x30e0, 0x30c8,
    0x30f3, 0x6, 0x30af, 0x30eb, 0x30bb, 0x3099, 0x30a4, 0x30ed, 0x4, 0x30af, 0x30ed, 0x30fc,
    0x30cd, 0x3, 0x30b1, 0x30fc, 0x30b9, 0x3, 0x30b3, 0x30eb, 0x30ca, 0x4, 0x30b3, 0x30fc,
    0x30db, 0x309a, 0x4, 0x30b5, 0x30a4, 0x30af, 0x30eb, 0x5, 0x30b5, 0x30f3, 0x30c1, 0x30fc,
    0x30e0, 0x5, 0x30b7, 0x30ea, 0x30f3, 0x30af, 0x3099, 0x3, 0x30bb, 0x30f3, 0x30c1, 0x3,
    0x30bb, 0x30f3, 0x30c8, 0x4, 0x30bf, 0x3099, 0x30fc, 0x30b9, 0x3, 0x30c6, 0x3099, 0x30b7,
    0x3, 0x30c8, 0x3099, 0x30eb, 0x2, 0x30c8, 0x30f3, 0x2, 0x30ca, 0x30ce, 0x3, 0x30ce,
    0x30c3, 0x30c8, 0x3, 0x30cf, 0x30a4, 0x30c4, 0x6, 0x30cf, 0x309a, 0x30fc, 0x30bb, 0x30f3,
    0x30c8, 0x4, 0x30cf, 0x309a, 0x30fc, 0x30c4, 0x5, 0x30cf, 0x3099, 0x30fc, 0x30ec, 0x30eb,
    0x6, 0x30d2, 0x309a, 0x30a2, 0x30b9, 0x30c8, 0x30eb, 0x4, 0x30d2, 0x309a, 0x30af, 0x30eb,
    0x3, 0x30d2, 0x309a, 0x30b3, 0x3, 0x30d2, 0x3099, 0x30eb, 0x6, 0x30d5, 0x30a1, 0x30e9,
    0x30c3, 0x30c8, 0x3099, 0x4, 0x30d5, 0x30a3, 0x30fc, 0x30c8, 0x6, 0x30d5, 0x3099, 0x30c3,
    0x30b7, 0x30a7, 0x30eb, 0x3, 0x30d5, 0x30e9, 0x30f3, 0x5, 0x30d8, 0x30af, 0x30bf, 0x30fc,
    0x30eb, 0x3, 0x30d8, 0x309a, 0x30bd, 0x4, 0x30d8, 0x309a, 0x30cb, 0x30d2, 0x3, 0x30d8,
    0x30eb, 0x30c4, 0x4, 0x30d8, 0x309a, 0x30f3, 0x30b9, 0x5, 0x30d8, 0x309a, 0x30fc, 0x30b7,
    0x3099, 0x4, 0x30d8, 0x3099, 0x30fc, 0x30bf, 0x5, 0x30db, 0x309a, 0x30a4, 0x30f3, 0x30c8,
    0x4, 0x30db, 0x3099, 0x30eb, 0x30c8, 0x2, 0x30db, 0x30f3, 0x5, 0x30db, 0x309a, 0x30f3,
    0x30c8, 0x3099, 0x3, 0x30db, 0x30fc, 0x30eb, 0x3, 0x30db, 0x30fc, 0x30f3, 0x4, 0x30de,
    0x30a4, 0x30af, 0x30ed, 0x3, 0x30de, 0x30a4, 0x30eb, 0x3, 0x30de, 0x30c3, 0x30cf, 0x3,
    0x30de, 0x30eb, 0x30af, 0x5, 0x30de, 0x30f3, 0x30b7, 0x30e7, 0x30f3, 0x4, 0x30df, 0x30af,
    0x30ed, 0x30f3, 0x2, 0x30df, 0x30ea, 0x6, 0x30df, 0x30ea, 0x30cf, 0x3099, 0x30fc, 0x30eb,
    0x3, 0x30e1, 0x30ab, 0x3099, 0x5, 0x30e1, 0x30ab, 0x3099, 0x30c8, 0x30f3, 0x4, 0x30e1,
    0x30fc, 0x30c8, 0x30eb, 0x4, 0x30e4, 0x30fc, 0x30c8, 0x3099, 0x3, 0x30e4, 0x30fc, 0x30eb,
    0x3, 0x30e6, 0x30a2, 0x30f3, 0x4, 0x30ea, 0x30c3, 0x30c8, 0x30eb, 0x2, 0x30ea, 0x30e9,
    0x4, 0x30eb, 0x30d2, 0x309a, 0x30fc, 0x5, 0x30eb, 0x30fc, 0x30d5, 0x3099, 0x30eb, 0x2,
    0x30ec, 0x30e0, 0x6, 0x30ec, 0x30f3, 0x30c8, 0x30b1, 0x3099, 0x30f3, 0x3, 0x30ef, 0x30c3,
    0x30c8, 0x2, 0x30, 0x70b9, 0x2, 0x31, 0x70b9, 0x2, 0x32, 0x70b9, 0x2, 0x33,
    0x70b9, 0x2, 0x34, 0x70b9, 0x2, 0x35, 0x70b9, 0x2, 0x36, 0x70b9, 0x2, 0x37,
    0x70b9, 0x2, 0x38, 0x70b9, 0x2, 0x39, 0x70b9, 0x3, 0x31, 0x30, 0x70b9, 0x3,
    0x31, 0x31, 0x70b9, 0x3, 0x31, 0x32, 0x70b9, 0x3, 0x31, 0x33, 0x70b9, 0x3,
    0x31, 0x34, 0x70b9, 0x3, 0x31, 0x35, 0x70b9, 0x3, 0x31, 0x36, 0x70b9, 0x3,
    0x31, 0x37, 0x70b9, 0x3, 0x31, 0x38, 0x70b9, 0x3, 0x31, 0x39, 0x70b9, 0x3,
    0x32, 0x30, 0x70b9, 0x3, 0x32, 0x31, 0x70b9, 0x3, 0x32, 0x32, 0x70b9, 0x3,
    0x32, 0x33, 0x70b9, 0x3, 0x32, 0x34, 0x70b9, 0x3, 0x68, 0x50, 0x61, 0x2,
    0x64, 0x61, 0x2, 0x41, 0x55, 0x3, 0x62, 0x61, 0x72, 0x2, 0x6f, 0x56,
    0x2, 0x70, 0x63, 0x2, 0x64, 0x6d, 0x3, 0x64, 0x6d, 0x32, 0x3, 0x64,
    0x6d, 0x33, 0x2, 0x49, 0x55, 0x2, 0x5e73, 0x6210, 0x2, 0x662d, 0x548c, 0x2,
    0x5927, 0x6b63, 0x2, 0x660e, 0x6cbb, 0x4, 0x682a, 0x5f0f, 0x4f1a, 0x793e, 0x2, 0x70,
    0x41, 0x2, 0x6e, 0x41, 0x2, 0x3bc, 0x41, 0x2, 0x6d, 0x41, 0x2, 0x6b,
    0x41, 0x2, 0x4b, 0x42, 0x2, 0x4d, 0x42, 0x2, 0x47, 0x42, 0x3, 0x63,
    0x61, 0x6c, 0x4, 0x6b, 0x63, 0x61, 0x6c, 0x2, 0x70, 0x46, 0x2, 0x6e,
    0x46, 0x2, 0x3bc, 0x46, 0x2, 0x3bc, 0x67, 0x2, 0x6d, 0x67, 0x2, 0x6b,
    0x67, 0x2, 0x48, 0x7a, 0x3, 0x6b, 0x48, 0x7a, 0x3, 0x4d, 0x48, 0x7a,
    0x3, 0x47, 0x48, 0x7a, 0x3, 0x54, 0x48, 0x7a, 0x2, 0x3bc, 0x6c, 0x2,
    0x6d, 0x6c, 0x2, 0x64, 0x6c, 0x2, 0x6b, 0x6c, 0x2, 0x66, 0x6d, 0x2,
    0x6e, 0x6d, 0x2, 0x3bc, 0x6d, 0x2, 0x6d, 0x6d, 0x2, 0x63, 0x6d, 0x2,
    0x6b, 0x6d, 0x3, 0x6d, 0x6d, 0x32, 0x3, 0x63, 0x6d, 0x32, 0x2, 0x6d,
    0x32, 0x3, 0x6b, 0x6d, 0x32, 0x3, 0x6d, 0x6d, 0x33, 0x3, 0x63, 0x6d,
    0x33, 0x2, 0x6d, 0x33, 0x3, 0x6b, 0x6d, 0x33, 0x3, 0x6d, 0x2215, 0x73,
    0x4, 0x6d, 0x2215, 0x73, 0x32, 0x2, 0x50, 0x61, 0x3, 0x6b, 0x50, 0x61,
    0x3, 0x4d, 0x50, 0x61, 0x3, 0x47, 0x50, 0x61, 0x3, 0x72, 0x61, 0x64,
    0x5, 0x72, 0x61, 0x64, 0x2215, 0x73, 0x6, 0x72, 0x61, 0x64, 0x2215, 0x73,
    0x32, 0x2, 0x70, 0x73, 0x2, 0x6e, 0x73, 0x2, 0x3bc, 0x73, 0x2, 0x6d,
    0x73, 0x2, 0x70, 0x56, 0x2, 0x6e, 0x56, 0x2, 0x3bc, 0x56, 0x2, 0x6d,
    0x56, 0x2, 0x6b, 0x56, 0x2, 0x4d, 0x56, 0x2, 0x70, 0x57, 0x2, 0x6e,
    0x57, 0x2, 0x3bc, 0x57, 0x2, 0x6d, 0x57, 0x2, 0x6b, 0x57, 0x2, 0x4d,
    0x57, 0x2, 0x6b, 0x3a9, 0x2, 0x4d, 0x3a9, 0x4, 0x61, 0x2e, 0x6d, 0x2e,
    0x2, 0x42, 0x71, 0x2, 0x63, 0x63, 0x2, 0x63, 0x64, 0x4, 0x43, 0x2215,
    0x6b, 0x67, 0x3, 0x43, 0x6f, 0x2e, 0x2, 0x64, 0x42, 0x2, 0x47, 0x79,
    0x2, 0x68, 0x61, 0x2, 0x48, 0x50, 0x2, 0x69, 0x6e, 0x2, 0x4b, 0x4b,
    0x2, 0x4b, 0x4d, 0x2, 0x6b, 0x74, 0x2, 0x6c, 0x6d, 0x2, 0x6c, 0x6e,
    0x3, 0x6c, 0x6f, 0x67, 0x2, 0x6c, 0x78, 0x2, 0x6d, 0x62, 0x3, 0x6d,
    0x69, 0x6c, 0x3, 0x6d, 0x6f, 0x6c, 0x2, 0x50, 0x48, 0x4, 0x70, 0x2e,
    0x6d, 0x2e, 0x3, 0x50, 0x50, 0x4d, 0x2, 0x50, 0x52, 0x2, 0x73, 0x72,
    0x2, 0x53, 0x76, 0x2, 0x57, 0x62, 0x3, 0x56, 0x2215, 0x6d, 0x3, 0x41,
    0x2215, 0x6d, 0x2, 0x31, 0x65e5, 0x2, 0x32, 0x65e5, 0x2, 0x33, 0x65e5, 0x2,
    0x34, 0x65e5, 0x2, 0x35, 0x65e5, 0x2, 0x36, 0x65e5, 0x2, 0x37, 0x65e5, 0x2,
    0x38, 0x65e5, 0x2, 0x39, 0x65e5, 0x3, 0x31, 0x30, 0x65e5, 0x3, 0x31, 0x31,
    0x65e5, 0x3, 0x31, 0x32, 0x65e5, 0x3, 0x31, 0x33, 0x65e5, 0x3, 0x31, 0x34,
    0x65e5, 0x3, 0x31, 0x35, 0x65e5, 0x3, 0x31, 0x36, 0x65e5, 0x3, 0x31, 0x37,
    0x65e5, 0x3, 0x31, 0x38, 0x65e5, 0x3, 0x31, 0x39, 0x65e5, 0x3, 0x32, 0x30,
    0x65e5, 0x3, 0x32, 0x31, 0x65e5, 0x3, 0x32, 0x32, 0x65e5, 0x3, 0x32, 0x33,
    0x65e5, 0x3, 0x32, 0x34, 0x65e5, 0x3, 0x32, 0x35, 0x65e5, 0x3, 0x32, 0x36,
    0x65e5, 0x3, 0x32, 0x37, 0x65e5, 0x3, 0x32, 0x38, 0x65e5, 0x3, 0x32, 0x39,
    0x65e5, 0x3, 0x33, 0x30, 0x65e5, 0x3, 0x33, 0x31, 0x65e5, 0x3, 0x67, 0x61,
    0x6c, 0x1, 0x44a, 0x1, 0x44c, 0x1, 0xa76f, 0x1, 0x126, 0x1, 0x153, 0x1,
    0xa727, 0x1, 0xab37, 0x1, 0x26b, 0x1, 0xab52, 0x1, 0x28d, 0x1, 0x8c48, 0x1,
    0x66f4, 0x1, 0x8cc8, 0x1, 0x6ed1, 0x1, 0x4e32, 0x1, 0x53e5, 0x1, 0x5951, 0x1,
    0x5587, 0x1, 0x5948, 0x1, 0x61f6, 0x1, 0x7669, 0x1, 0x7f85, 0x1, 0x863f, 0x1,
    0x87ba, 0x1, 0x88f8, 0x1, 0x908f, 0x1, 0x6a02, 0x1, 0x6d1b, 0x1, 0x70d9, 0x1,
    0x73de, 0x1, 0x843d, 0x1, 0x916a, 0x1, 0x99f1, 0x1, 0x4e82, 0x1, 0x5375, 0x1,
    0x6b04, 0x1, 0x721b, 0x1, 0x862d, 0x1, 0x9e1e, 0x1, 0x5d50, 0x1, 0x6feb, 0x1,
    0x85cd, 0x1, 0x8964, 0x1, 0x62c9, 0x1, 0x81d8, 0x1, 0x881f, 0x1, 0x5eca, 0x1,
    0x6717, 0x1, 0x6d6a, 0x1, 0x72fc, 0x1, 0x90ce, 0x1, 0x4f86, 0x1, 0x51b7, 0x1,
    0x52de, 0x1, 0x64c4, 0x1, 0x6ad3, 0x1, 0x7210, 0x1, 0x76e7, 0x1, 0x8606, 0x1,
    0x865c, 0x1, 0x8def, 0x1, 0x9732, 0x1, 0x9b6f, 0x1, 0x9dfa, 0x1, 0x788c, 0x1,
    0x797f, 0x1, 0x7da0, 0x1, 0x83c9, 0x1, 0x9304, 0x1, 0x8ad6, 0x1, 0x58df, 0x1,
    0x5f04, 0x1, 0x7c60, 0x1, 0x807e, 0x1, 0x7262, 0x1, 0x78ca, 0x1, 0x8cc2, 0x1,
    0x96f7, 0x1, 0x58d8, 0x1, 0x5c62, 0x1, 0x6a13, 0x1, 0x6dda, 0x1, 0x6f0f, 0x1,
    0x7d2f, 0x1, 0x7e37, 0x1, 0x964b, 0x1, 0x52d2, 0x1, 0x808b, 0x1, 0x51dc, 0x1,
    0x51cc, 0x1, 0x7a1c, 0x1, 0x7dbe, 0x1, 0x83f1, 0x1, 0x9675, 0x1, 0x8b80, 0x1,
    0x62cf, 0x1, 0x8afe, 0x1, 0x4e39, 0x1, 0x5be7, 0x1, 0x6012, 0x1, 0x7387, 0x1,
    0x7570, 0x1, 0x5317, 0x1, 0x78fb, 0x1, 0x4fbf, 0x1, 0x5fa9, 0x1, 0x4e0d, 0x1,
    0x6ccc, 0x1, 0x6578, 0x1, 0x7d22, 0x1, 0x53c3, 0x1, 0x585e, 0x1, 0x7701, 0x1,
    0x8449, 0x1, 0x8aaa, 0x1, 0x6bba, 0x1, 0x6c88, 0x1, 0x62fe, 0x1, 0x82e5, 0x1,
    0x63a0, 0x1, 0x7565, 0x1, 0x4eae, 0x1, 0x5169, 0x1, 0x51c9, 0x1, 0x6881, 0x1,
    0x7ce7, 0x1, 0x826f, 0x1, 0x8ad2, 0x1, 0x91cf, 0x1, 0x52f5, 0x1, 0x5442, 0x1,
    0x5eec, 0x1, 0x65c5, 0x1, 0x6ffe, 0x1, 0x792a, 0x1, 0x95ad, 0x1, 0x9a6a, 0x1,
    0x9e97, 0x1, 0x9ece, 0x1, 0x66c6, 0x1, 0x6b77, 0x1, 0x8f62, 0x1, 0x5e74, 0x1,
    0x6190, 0x1, 0x6200, 0x1, 0x649a, 0x1, 0x6f23, 0x1, 0x7149, 0x1, 0x7489, 0x1,
    0x79ca, 0x1, 0x7df4, 0x1, 0x806f, 0x1, 0x8f26, 0x1, 0x84ee, 0x1, 0x9023, 0x1,
    0x934a, 0x1, 0x5217, 0x1, 0x52a3, 0x1, 0x54bd, 0x1, 0x70c8, 0x1, 0x88c2, 0x1,
    0x5ec9, 0x1, 0x5ff5, 0x1, 0x637b, 0x1, 0x6bae, 0x1, 0x7c3e, 0x1, 0x7375, 0x1,
    0x4ee4, 0x1, 0x56f9, 0x1, 0x5dba, 0x1, 0x601c, 0x1, 0x73b2, 0x1, 0x7469, 0x1,
    0x7f9a, 0x1, 0x8046, 0x1, 0x9234, 0x1, 0x96f6, 0x1, 0x9748, 0x1, 0x9818, 0x1,
    0x4f8b, 0x1, 0x79ae, 0x1, 0x91b4, 0x1, 0x96b8, 0x1, 0x60e1, 0x1, 0x4e86, 0x1,
    0x50da, 0x1, 0x5bee, 0x1, 0x5c3f, 0x1, 0x6599, 0x1, 0x71ce, 0x1, 0x7642, 0x1,
    0x84fc, 0x1, 0x907c, 0x1, 0x6688, 0x1, 0x962e, 0x1, 0x5289, 0x1, 0x677b, 0x1,
    0x67f3, 0x1, 0x6d41, 0x1, 0x6e9c, 0x1, 0x7409, 0x1, 0x7559, 0x1, 0x786b, 0x1,
    0x7d10, 0x1, 0x985e, 0x1, 0x622e, 0x1, 0x9678, 0x1, 0x502b, 0x1, 0x5d19, 0x1,
    0x6dea, 0x1, 0x8f2a, 0x1, 0x5f8b, 0x1, 0x6144, 0x1, 0x6817, 0x1, 0x9686, 0x1,
    0x5229, 0x1, 0x540f, 0x1, 0x5c65, 0x1, 0x6613, 0x1, 0x674e, 0x1, 0x68a8, 0x1,
    0x6ce5, 0x1, 0x7406, 0x1, 0x75e2, 0x1, 0x7f79, 0x1, 0x88cf, 0x1, 0x88e1, 0x1,
    0x96e2, 0x1, 0x533f, 0x1, 0x6eba, 0x1, 0x541d, 0x1, 0x71d0, 0x1, 0x7498, 0x1,
    0x85fa, 0x1, 0x96a3, 0x1, 0x9c57, 0x1, 0x9e9f, 0x1, 0x6797, 0x1, 0x6dcb, 0x1,
    0x81e8, 0x1, 0x7b20, 0x1, 0x7c92, 0x1, 0x72c0, 0x1, 0x7099, 0x1, 0x8b58, 0x1,
    0x4ec0, 0x1, 0x8336, 0x1, 0x523a, 0x1, 0x5207, 0x1, 0x5ea6, 0x1, 0x62d3, 0x1,
    0x7cd6, 0x1, 0x5b85, 0x1, 0x6d1e, 0x1, 0x66b4, 0x1, 0x8f3b, 0x1, 0x964d, 0x1,
    0x5ed3, 0x1, 0x5140, 0x1, 0x55c0, 0x1, 0x585a, 0x1, 0x6674, 0x1, 0x51de, 0x1,
    0x732a, 0x1, 0x76ca, 0x1, 0x793c, 0x1, 0x795e, 0x1, 0x7965, 0x1, 0x798f, 0x1,
    0x9756, 0x1, 0x7cbe, 0x1, 0x8612, 0x1, 0x8af8, 0x1, 0x9038, 0x1, 0x90fd, 0x1,
    0x98ef, 0x1, 0x98fc, 0x1, 0x9928, 0x1, 0x9db4, 0x1, 0x90de, 0x1, 0x96b7, 0x1,
    0x4fae, 0x1, 0x50e7, 0x1, 0x514d, 0x1, 0x52c9, 0x1, 0x52e4, 0x1, 0x5351, 0x1,
    0x559d, 0x1, 0x5606, 0x1, 0x5668, 0x1, 0x5840, 0x1, 0x58a8, 0x1, 0x5c64, 0x1,
    0x6094, 0x1, 0x6168, 0x1, 0x618e, 0x1, 0x61f2, 0x1, 0x654f, 0x1, 0x65e2, 0x1,
    0x6691, 0x1, 0x6885, 0x1, 0x6d77, 0x1, 0x6e1a, 0x1, 0x6f22, 0x1, 0x716e, 0x1,
    0x722b, 0x1, 0x7422, 0x1, 0x7891, 0x1, 0x7949, 0x1, 0x7948, 0x1, 0x7950, 0x1,
    0x7956, 0x1, 0x798d, 0x1, 0x798e, 0x1, 0x7a40, 0x1, 0x7a81, 0x1, 0x7bc0, 0x1,
    0x7e09, 0x1, 0x7e41, 0x1, 0x7f72, 0x1, 0x8005, 0x1, 0x81ed, 0x1, 0x8279, 0x1,
    0x8457, 0x1, 0x8910, 0x1, 0x8996, 0x1, 0x8b01, 0x1, 0x8b39, 0x1, 0x8cd3, 0x1,
    0x8d08, 0x1, 0x8fb6, 0x1, 0x96e3, 0x1, 0x97ff, 0x1, 0x983b, 0x1, 0x6075, 0x1,
    0x242ee, 0x1, 0x8218, 0x1, 0x4e26, 0x1, 0x51b5, 0x1, 0x5168, 0x1, 0x4f80, 0x1,
    0x5145, 0x1, 0x5180, 0x1, 0x52c7, 0x1, 0x52fa, 0x1, 0x5555, 0x1, 0x5599, 0x1,
    0x55e2, 0x1, 0x58b3, 0x1, 0x5944, 0x1, 0x5954, 0x1, 0x5a62, 0x1, 0x5b28, 0x1,
    0x5ed2, 0x1, 0x5ed9, 0x1, 0x5f69, 0x1, 0x5fad, 0x1, 0x60d8, 0x1, 0x614e, 0x1,
    0x6108, 0x1, 0x6160, 0x1, 0x6234, 0x1, 0x63c4, 0x1, 0x641c, 0x1, 0x6452, 0x1,
    0x6556, 0x1, 0x671b, 0x1, 0x6756, 0x1, 0x6edb, 0x1, 0x6ecb, 0x1, 0x701e, 0x1,
    0x77a7, 0x1, 0x7235, 0x1, 0x72af, 0x1, 0x7471, 0x1, 0x7506, 0x1, 0x753b, 0x1,
    0x761d, 0x1, 0x761f, 0x1, 0x76db, 0x1, 0x76f4, 0x1, 0x774a, 0x1, 0x7740, 0x1,
    0x78cc, 0x1, 0x7ab1, 0x1, 0x7c7b, 0x1, 0x7d5b, 0x1, 0x7f3e, 0x1, 0x8352, 0x1,
    0x83ef, 0x1, 0x8779, 0x1, 0x8941, 0x1, 0x8986, 0x1, 0x8abf, 0x1, 0x8acb, 0x1,
    0x8aed, 0x1, 0x8b8a, 0x1, 0x8f38, 0x1, 0x9072, 0x1, 0x9199, 0x1, 0x9276, 0x1,
    0x967c, 0x1, 0x97db, 0x1, 0x980b, 0x1, 0x9b12, 0x1, 0x2284a, 0x1, 0x22844, 0x1,
    0x233d5, 0x1, 0x3b9d, 0x1, 0x4018, 0x1, 0x4039, 0x1, 0x25249, 0x1, 0x25cd0, 0x1,
    0x27ed3, 0x1, 0x9f43, 0x1, 0x9f8e, 0x2, 0x66, 0x66, 0x2, 0x66, 0x69, 0x2,
    0x66, 0x6c, 0x3, 0x66, 0x66, 0x69, 0x3, 0x66, 0x66, 0x6c, 0x2, 0x73,
    0x74, 0x2, 0x574, 0x576, 0x2, 0x574, 0x565, 0x2, 0x574, 0x56b, 0x2, 0x57e,
    0x576, 0x2, 0x574, 0x56d, 0x2, 0x5d9, 0x5b4, 0x2, 0x5f2, 0x5b7, 0x1, 0x5e2,
    0x1, 0x5d4, 0x1, 0x5db, 0x1, 0x5dc, 0x1, 0x5dd, 0x1, 0x5e8, 0x1, 0x5ea,
    0x2, 0x5e9, 0x5c1, 0x2, 0x5e9, 0x5c2, 0x3, 0x5e9, 0x5bc, 0x5c1, 0x3, 0x5e9,
    0x5bc, 0x5c2, 0x2, 0x5d0, 0x5b7, 0x2, 0x5d0, 0x5b8, 0x2, 0x5d0, 0x5bc, 0x2,
    0x5d1, 0x5bc, 0x2, 0x5d2, 0x5bc, 0x2, 0x5d3, 0x5bc, 0x2, 0x5d4, 0x5bc, 0x2,
    0x5d5, 0x5bc, 0x2, 0x5d6, 0x5bc, 0x2, 0x5d8, 0x5bc, 0x2, 0x5d9, 0x5bc, 0x2,
    0x5da, 0x5bc, 0x2, 0x5db, 0x5bc, 0x2, 0x5dc, 0x5bc, 0x2, 0x5de, 0x5bc, 0x2,
    0x5e0, 0x5bc, 0x2, 0x5e1, 0x5bc, 0x2, 0x5e3, 0x5bc, 0x2, 0x5e4, 0x5bc, 0x2,
    0x5e6, 0x5bc, 0x2, 0x5e7, 0x5bc, 0x2, 0x5e8, 0x5bc, 0x2, 0x5e9, 0x5bc, 0x2,
    0x5ea, 0x5bc, 0x2, 0x5d5, 0x5b9, 0x2, 0x5d1, 0x5bf, 0x2, 0x5db, 0x5bf, 0x2,
    0x5e4, 0x5bf, 0x2, 0x5d0, 0x5dc, 0x1, 0x671, 0x1, 0x67b, 0x1, 0x67e, 0x1,
    0x680, 0x1, 0x67a, 0x1, 0x67f, 0x1, 0x679, 0x1, 0x6a4, 0x1, 0x6a6, 0x1,
    0x684, 0x1, 0x683, 0x1, 0x686, 0x1, 0x687, 0x1, 0x68d, 0x1, 0x68c, 0x1,
    0x68e, 0x1, 0x688, 0x1, 0x698, 0x1, 0x691, 0x1, 0x6a9, 0x1, 0x6af, 0x1,
    0x6b3, 0x1, 0x6b1, 0x1, 0x6ba, 0x1, 0x6bb, 0x1, 0x6c1, 0x1, 0x6be, 0x1,
    0x6d2, 0x1, 0x6ad, 0x1, 0x6c7, 0x1, 0x6c6, 0x1, 0x6c8, 0x1, 0x6cb, 0x1,
    0x6c5, 0x1, 0x6c9, 0x1, 0x6d0, 0x1, 0x649, 0x3, 0x64a, 0x654, 0x627, 0x3,
    0x64a, 0x654, 0x6d5, 0x3, 0x64a, 0x654, 0x648, 0x3, 0x64a, 0x654, 0x6c7, 0x3,
    0x64a, 0x654, 0x6c6, 0x3, 0x64a, 0x654, 0x6c8, 0x3, 0x64a, 0x654, 0x6d0, 0x3,
    0x64a, 0x654, 0x649, 0x1, 0x6cc, 0x3, 0x64a, 0x654, 0x62c, 0x3, 0x64a, 0x654,
    0x62d, 0x3, 0x64a, 0x654, 0x645, 0x3, 0x64a, 0x654, 0x64a, 0x2, 0x628, 0x62c,
    0x2, 0x628, 0x62d, 0x2, 0x628, 0x62e, 0x2, 0x628, 0x645, 0x2, 0x628, 0x649,
    0x2, 0x628, 0x64a, 0x2, 0x62a, 0x62c, 0x2, 0x62a, 0x62d, 0x2, 0x62a, 0x62e,
    0x2, 0x62a, 0x645, 0x2, 0x62a, 0x649, 0x2, 0x62a, 0x64a, 0x2, 0x62b, 0x62c,
    0x2, 0x62b, 0x645, 0x2, 0x62b, 0x649, 0x2, 0x62b, 0x64a, 0x2, 0x62c, 0x62d,
    0x2, 0x62c, 0x645, 0x2, 0x62d, 0x62c, 0x2, 0x62d, 0x645, 0x2, 0x62e, 0x62c,
    0x2, 0x62e, 0x62d, 0x2, 0x62e, 0x645, 0x2, 0x633, 0x62c, 0x2, 0x633, 0x62d,
    0x2, 0x633, 0x62e, 0x2, 0x633, 0x645, 0x2, 0x635, 0x62d, 0x2, 0x635, 0x645,
    0x2, 0x636, 0x62c, 0x2, 0x636, 0x62d, 0x2, 0x636, 0x62e, 0x2, 0x636, 0x645,
    0x2, 0x637, 0x62d, 0x2, 0x637, 0x645, 0x2, 0x638, 0x645, 0x2, 0x639, 0x62c,
    0x2, 0x639, 0x645, 0x2, 0x63a, 0x62c, 0x2, 0x63a, 0x645, 0x2, 0x641, 0x62c,
    0x2, 0x641, 0x62d, 0x2, 0x641, 0x62e, 0x2, 0x641, 0x645, 0x2, 0x641, 0x649,
    0x2, 0x641, 0x64a, 0x2, 0x642, 0x62d, 0x2, 0x642, 0x645, 0x2, 0x642, 0x649,
    0x2, 0x642, 0x64a, 0x2, 0x643, 0x627, 0x2, 0x643, 0x62c, 0x2, 0x643, 0x62d,
    0x2, 0x643, 0x62e, 0x2, 0x643, 0x644, 0x2, 0x643, 0x645, 0x2, 0x643, 0x649,
    0x2, 0x643, 0x64a, 0x2, 0x644, 0x62c, 0x2, 0x644, 0x62d, 0x2, 0x644, 0x62e,
    0x2, 0x644, 0x645, 0x2, 0x644, 0x649, 0x2, 0x644, 0x64a, 0x2, 0x645, 0x62c,
    0x2, 0x645, 0x62d, 0x2, 0x645, 0x62e, 0x2, 0x645, 0x645, 0x2, 0x645, 0x649,
    0x2, 0x645, 0x64a, 0x2, 0x646, 0x62c, 0x2, 0x646, 0x62d, 0x2, 0x646, 0x62e,
    0x2, 0x646, 0x645, 0x2, 0x646, 0x649, 0x2, 0x646, 0x64a, 0x2, 0x647, 0x62c,
    0x2, 0x647, 0x645, 0x2, 0x647, 0x649, 0x2, 0x647, 0x64a, 0x2, 0x64a, 0x62c,
    0x2, 0x64a, 0x62d, 0x2, 0x64a, 0x62e, 0x2, 0x64a, 0x645, 0x2, 0x64a, 0x649,
    0x2, 0x64a, 0x64a, 0x2, 0x630, 0x670, 0x2, 0x631, 0x670, 0x2, 0x649, 0x670,
    0x3, 0x20, 0x64c, 0x651, 0x3, 0x20, 0x64d, 0x651, 0x3, 0x20, 0x64e, 0x651,
    0x3, 0x20, 0x64f, 0x651, 0x3, 0x20, 0x650, 0x651, 0x3, 0x20, 0x651, 0x670,
    0x3, 0x64a, 0x654, 0x631, 0x3, 0x64a, 0x654, 0x632, 0x3, 0x64a, 0x654, 0x646,
    0x2, 0x628, 0x631, 0x2, 0x628, 0x632, 0x2, 0x628, 0x646, 0x2, 0x62a, 0x631,
    0x2, 0x62a, 0x632, 0x2, 0x62a, 0x646, 0x2, 0x62b, 0x631, 0x2, 0x62b, 0x632,
    0x2, 0x62b, 0x646, 0x2, 0x645, 0x627, 0x2, 0x646, 0x631, 0x2, 0x646, 0x632,
    0x2, 0x646, 0x646, 0x2, 0x64a, 0x631, 0x2, 0x64a, 0x632, 0x2, 0x64a, 0x646,
    0x3, 0x64a, 0x654, 0x62e, 0x3, 0x64a, 0x654, 0x647, 0x2, 0x628, 0x647, 0x2,
    0x62a, 0x647, 0x2, 0x635, 0x62e, 0x2, 0x644, 0x647, 0x2, 0x646, 0x647, 0x2,
    0x647, 0x670, 0x2, 0x64a, 0x647, 0x2, 0x62b, 0x647, 0x2, 0x633, 0x647, 0x2,
    0x634, 0x645, 0x2, 0x634, 0x647, 0x3, 0x640, 0x64e, 0x651, 0x3, 0x640, 0x64f,
    0x651, 0x3, 0x640, 0x650, 0x651, 0x2, 0x637, 0x649, 0x2, 0x637, 0x64a, 0x2,
    0x639, 0x649, 0x2, 0x639, 0x64a, 0x2, 0x63a, 0x649, 0x2, 0x63a, 0x64a, 0x2,
    0x633, 0x649, 0x2, 0x633, 0x64a, 0x2, 0x634, 0x649, 0x2, 0x634, 0x64a, 0x2,
    0x62d, 0x649, 0x2, 0x62d, 0x64a, 0x2, 0x62c, 0x649, 0x2, 0x62c, 0x64a, 0x2,
    0x62e, 0x649, 0x2, 0x62e, 0x64a, 0x2, 0x635, 0x649, 0x2, 0x635, 0x64a, 0x2,
    0x636, 0x649, 0x2, 0x636, 0x64a, 0x2, 0x634, 0x62c, 0x2, 0x634, 0x62d, 0x2,
    0x634, 0x62e, 0x2, 0x634, 0x631, 0x2, 0x633, 0x631, 0x2, 0x635, 0x631, 0x2,
    0x636, 0x631, 0x2, 0x627, 0x64b, 0x3, 0x62a, 0x62c, 0x645, 0x3, 0x62a, 0x62d,
    0x62c, 0x3, 0x62a, 0x62d, 0x645, 0x3, 0x62a, 0x62e, 0x645, 0x3, 0x62a, 0x645,
    0x62c, 0x3, 0x62a, 0x645, 0x62d, 0x3, 0x62a, 0x645, 0x62e, 0x3, 0x62c, 0x645,
    0x62d, 0x3, 0x62d, 0x645, 0x64a, 0x3, 0x62d, 0x645, 0x649, 0x3, 0x633, 0x62d,
    0x62c, 0x3, 0x633, 0x62c, 0x62d, 0x3, 0x633, 0x62c, 0x649, 0x3, 0x633, 0x645,
    0x62d, 0x3, 0x633, 0x645, 0x62c, 0x3, 0x633, 0x645, 0x645, 0x3, 0x635, 0x62d,
    0x62d, 0x3, 0x635, 0x645, 0x645, 0x3, 0x634, 0x62d, 0x645, 0x3, 0x634, 0x62c,
    0x64a, 0x3, 0x634, 0x645, 0x62e, 0x3, 0x634, 0x645, 0x645, 0x3, 0x636, 0x62d,
    0x649, 0x3, 0x636, 0x62e, 0x645, 0x3, 0x637, 0x645, 0x62d, 0x3, 0x637, 0x645,
    0x645, 0x3, 0x637, 0x645, 0x64a, 0x3, 0x639, 0x62c, 0x645, 0x3, 0x639, 0x645,
    0x645, 0x3, 0x639, 0x645, 0x649, 0x3, 0x63a, 0x645, 0x645, 0x3, 0x63a, 0x645,
    0x64a, 0x3, 0x63a, 0x645, 0x649, 0x3, 0x641, 0x62e, 0x645, 0x3, 0x642, 0x645,
    0x62d, 0x3, 0x642, 0x645, 0x645, 0x3, 0x644, 0x62d, 0x645, 0x3, 0x644, 0x62d,
    0x64a, 0x3, 0x644, 0x62d, 0x649, 0x3, 0x644, 0x62c, 0x62c, 0x3, 0x644, 0x62e,
    0x645, 0x3, 0x644, 0x645, 0x62d, 0x3, 0x645, 0x62d, 0x62c, 0x3, 0x645, 0x62d,
    0x645, 0x3, 0x645, 0x62d, 0x64a, 0x3, 0x645, 0x62c, 0x62d, 0x3, 0x645, 0x62c,
    0x645, 0x3, 0x645, 0x62e, 0x62c, 0x3, 0x645, 0x62e, 0x645, 0x3, 0x645, 0x62c,
    0x62e, 0x3, 0x647, 0x645, 0x62c, 0x3, 0x647, 0x645, 0x645, 0x3, 0x646, 0x62d,
    0x645, 0x3, 0x646, 0x62d, 0x649, 0x3, 0x646, 0x62c, 0x645, 0x3, 0x646, 0x62c,
    0x649, 0x3, 0x646, 0x645, 0x64a, 0x3, 0x646, 0x645, 0x649, 0x3, 0x64a, 0x645,
    0x645, 0x3, 0x628, 0x62e, 0x64a, 0x3, 0x62a, 0x62c, 0x64a, 0x3, 0x62a, 0x62c,
    0x649, 0x3, 0x62a, 0x62e, 0x64a, 0x3, 0x62a, 0x62e, 0x649, 0x3, 0x62a, 0x645,
    0x64a, 0x3, 0x62a, 0x645, 0x649, 0x3, 0x62c, 0x645, 0x64a, 0x3, 0x62c, 0x62d,
    0x649, 0x3, 0x62c, 0x645, 0x649, 0x3, 0x633, 0x62e, 0x649, 0x3, 0x635, 0x62d,
    0x64a, 0x3, 0x634, 0x62d, 0x64a, 0x3, 0x636, 0x62d, 0x64a, 0x3, 0x644, 0x62c,
    0x64a, 0x3, 0x644, 0x645, 0x64a, 0x3, 0x64a, 0x62d, 0x64a, 0x3, 0x64a, 0x62c,
    0x64a, 0x3, 0x64a, 0x645, 0x64a, 0x3, 0x645, 0x645, 0x64a, 0x3, 0x642, 0x645,
    0x64a, 0x3, 0x646, 0x62d, 0x64a, 0x3, 0x639, 0x645, 0x64a, 0x3, 0x643, 0x645,
    0x64a, 0x3, 0x646, 0x62c, 0x62d, 0x3, 0x645, 0x62e, 0x64a, 0x3, 0x644, 0x62c,
    0x645, 0x3, 0x643, 0x645, 0x645, 0x3, 0x62c, 0x62d, 0x64a, 0x3, 0x62d, 0x62c,
    0x64a, 0x3, 0x645, 0x62c, 0x64a, 0x3, 0x641, 0x645, 0x64a, 0x3, 0x628, 0x62d,
    0x64a, 0x3, 0x633, 0x62e, 0x64a, 0x3, 0x646, 0x62c, 0x64a, 0x3, 0x635, 0x644,
    0x6d2, 0x3, 0x642, 0x644, 0x6d2, 0x4, 0x627, 0x644, 0x644, 0x647, 0x4, 0x627,
    0x643, 0x628, 0x631, 0x4, 0x645, 0x62d, 0x645, 0x62f, 0x4, 0x635, 0x644, 0x639,
    0x645, 0x4, 0x631, 0x633, 0x648, 0x644, 0x4, 0x639, 0x644, 0x64a, 0x647, 0x4,
    0x648, 0x633, 0x644, 0x645, 0x3, 0x635, 0x644, 0x649, 0x12, 0x635, 0x644, 0x649,
    0x20, 0x627, 0x644, 0x644, 0x647, 0x20, 0x639, 0x644, 0x64a, 0x647, 0x20, 0x648,
    0x633, 0x644, 0x645, 0x8, 0x62c, 0x644, 0x20, 0x62c, 0x644, 0x627, 0x644, 0x647,
    0x4, 0x631, 0x6cc, 0x627, 0x644, 0x1, 0x2c, 0x1, 0x3001, 0x1, 0x3002, 0x1,
    0x3a, 0x1, 0x21, 0x1, 0x3f, 0x1, 0x3016, 0x1, 0x3017, 0x1, 0x2014, 0x1,
    0x2013, 0x1, 0x5f, 0x1, 0x7b, 0x1, 0x7d, 0x1, 0x3014, 0x1, 0x3015, 0x1,
    0x3010, 0x1, 0x3011, 0x1, 0x300a, 0x1, 0x300b, 0x1, 0x300c, 0x1, 0x300d, 0x1,
    0x300e, 0x1, 0x300f, 0x1, 0x5b, 0x1, 0x5d, 0x1, 0x23, 0x1, 0x26, 0x1,
    0x2a, 0x1, 0x2d, 0x1, 0x3c, 0x1, 0x3e, 0x1, 0x5c, 0x1, 0x24, 0x1,
    0x25, 0x1, 0x40, 0x2, 0x20, 0x64b, 0x2, 0x640, 0x64b, 0x2, 0x20, 0x64c,
    0x2, 0x20, 0x64d, 0x2, 0x20, 0x64e, 0x2, 0x640, 0x64e, 0x2, 0x20, 0x64f,
    0x2, 0x640, 0x64f, 0x2, 0x20, 0x650, 0x2, 0x640, 0x650, 0x2, 0x20, 0x651,
    0x2, 0x640, 0x651, 0x2, 0x20, 0x652, 0x2, 0x640, 0x652, 0x1, 0x621, 0x1,
    0x627, 0x1, 0x628, 0x1, 0x629, 0x1, 0x62a, 0x1, 0x62b, 0x1, 0x62c, 0x1,
    0x62d, 0x1, 0x62e, 0x1, 0x62f, 0x1, 0x630, 0x1, 0x631, 0x1, 0x632, 0x1,
    0x633, 0x1, 0x634, 0x1, 0x635, 0x1, 0x636, 0x1, 0x637, 0x1, 0x638, 0x1,
    0x639, 0x1, 0x63a, 0x1, 0x641, 0x1, 0x642, 0x1, 0x643, 0x1, 0x644, 0x1,
    0x645, 0x1, 0x646, 0x1, 0x647, 0x1, 0x648, 0x1, 0x64a, 0x3, 0x644, 0x627,
    0x653, 0x3, 0x644, 0x627, 0x654, 0x3, 0x644, 0x627, 0x655, 0x2, 0x644, 0x627,
    0x1, 0x22, 0x1, 0x27, 0x1, 0x2f, 0x1, 0x5e, 0x1, 0x7c, 0x1, 0x7e,
    0x1, 0x2985, 0x1, 0x2986, 0x1, 0x30fb, 0x1, 0x30a1, 0x1, 0x30a3, 0x1, 0x30a5,
    0x1, 0x30a7, 0x1, 0x30a9, 0x1, 0x30e3, 0x1, 0x30e5, 0x1, 0x30e7, 0x1, 0x30c3,
    0x1, 0x30fc, 0x1, 0x30f3, 0x1, 0x3099, 0x1, 0x309a, 0x1, 0xa2, 0x1, 0xa3,
    0x1, 0xac, 0x1, 0xa6, 0x1, 0xa5, 0x1, 0x20a9, 0x1, 0x2502, 0x1, 0x2190,
    0x1, 0x2191, 0x1, 0x2192, 0x1, 0x2193, 0x1, 0x25a0, 0x1, 0x25cb, 0x1, 0x2d0,
    0x1, 0x2d1, 0x1, 0xe6, 0x1, 0x299, 0x1, 0x253, 0x1, 0x2a3, 0x1, 0xab66,
    0x1, 0x2a5, 0x1, 0x2a4, 0x1, 0x256, 0x1, 0x257, 0x1, 0x1d91, 0x1, 0x258,
    0x1, 0x25e, 0x1, 0x2a9, 0x1, 0x264, 0x1, 0x262, 0x1, 0x260, 0x1, 0x29b,
    0x1, 0x29c, 0x1, 0x267, 0x1, 0x284, 0x1, 0x2aa, 0x1, 0x2ab, 0x1, 0x26c,
    0x1, 0x1df04, 0x1, 0xa78e, 0x1, 0x26e, 0x1, 0x1df05, 0x1, 0x28e, 0x1, 0x1df06,
    0x1, 0xf8, 0x1, 0x276, 0x1, 0x277, 0x1, 0x27a, 0x1, 0x1df08, 0x1, 0x27d,
    0x1, 0x27e, 0x1, 0x280, 0x1, 0x2a8, 0x1, 0x2a6, 0x1, 0xab67, 0x1, 0x2a7,
    0x1, 0x288, 0x1, 0x2c71, 0x1, 0x28f, 0x1, 0x2a1, 0x1, 0x2a2, 0x1, 0x298,
    0x1, 0x1c0, 0x1, 0x1c1, 0x1, 0x1c2, 0x1, 0x1df0a, 0x1, 0x1df1e, 0x2, 0x11099,
    0x110ba, 0x2, 0x1109b, 0x110ba, 0x2, 0x110a5, 0x110ba, 0x2, 0x11131, 0x11127, 0x2, 0x11132,
    0x11127, 0x2, 0x11347, 0x1133e, 0x2, 0x11347, 0x11357, 0x2, 0x114b9, 0x114ba, 0x2, 0x114b9,
    0x114b0, 0x2, 0x114b9, 0x114bd, 0x2, 0x115b8, 0x115af, 0x2, 0x115b9, 0x115af, 0x2, 0x11935,
    0x11930, 0x2, 0x1d157, 0x1d165, 0x2, 0x1d158, 0x1d165, 0x3, 0x1d158, 0x1d165, 0x1d16e, 0x3,
    0x1d158, 0x1d165, 0x1d16f, 0x3, 0x1d158, 0x1d165, 0x1d170, 0x3, 0x1d158, 0x1d165, 0x1d171, 0x3,
    0x1d158, 0x1d165, 0x1d172, 0x2, 0x1d1b9, 0x1d165, 0x2, 0x1d1ba, 0x1d165, 0x3, 0x1d1b9, 0x1d165,
    0x1d16e, 0x3, 0x1d1ba, 0x1d165, 0x1d16e, 0x3, 0x1d1b9, 0x1d165, 0x1d16f, 0x3, 0x1d1ba, 0x1d165,
    0x1d16f, 0x1, 0x131, 0x1, 0x237, 0x1, 0x391, 0x1, 0x392, 0x1, 0x394, 0x1,
    0x395, 0x1, 0x396, 0x1, 0x397, 0x1, 0x399, 0x1, 0x39a, 0x1, 0x39b, 0x1,
    0x39c, 0x1, 0x39d, 0x1, 0x39e, 0x1, 0x39f, 0x1, 0x3a1, 0x1, 0x3a4, 0x1,
    0x3a6, 0x1, 0x3a7, 0x1, 0x3a8, 0x1, 0x2207, 0x1, 0x3b1, 0x1, 0x3b6, 0x1,
    0x3b7, 0x1, 0x3bb, 0x1, 0x3bd, 0x1, 0x3be, 0x1, 0x3bf, 0x1, 0x3c3, 0x1,
    0x3c4, 0x1, 0x3c5, 0x1, 0x3c8, 0x1, 0x3c9, 0x1, 0x2202, 0x1, 0x3dc, 0x1,
    0x3dd, 0x1, 0x66e, 0x1, 0x6a1, 0x1, 0x66f, 0x2, 0x30, 0x2e, 0x2, 0x30,
    0x2c, 0x2, 0x31, 0x2c, 0x2, 0x32, 0x2c, 0x2, 0x33, 0x2c, 0x2, 0x34,
    0x2c, 0x2, 0x35, 0x2c, 0x2, 0x36, 0x2c, 0x2, 0x37, 0x2c, 0x2, 0x38,
    0x2c, 0x2, 0x39, 0x2c, 0x3, 0x28, 0x41, 0x29, 0x3, 0x28, 0x42, 0x29,
    0x3, 0x28, 0x43, 0x29, 0x3, 0x28, 0x44, 0x29, 0x3, 0x28, 0x45, 0x29,
    0x3, 0x28, 0x46, 0x29, 0x3, 0x28, 0x47, 0x29, 0x3, 0x28, 0x48, 0x29,
    0x3, 0x28, 0x49, 0x29, 0x3, 0x28, 0x4a, 0x29, 0x3, 0x28, 0x4b, 0x29,
    0x3, 0x28, 0x4c, 0x29, 0x3, 0x28, 0x4d, 0x29, 0x3, 0x28, 0x4e, 0x29,
    0x3, 0x28, 0x4f, 0x29, 0x3, 0x28, 0x50, 0x29, 0x3, 0x28, 0x51, 0x29,
    0x3, 0x28, 0x52, 0x29, 0x3, 0x28, 0x53, 0x29, 0x3, 0x28, 0x54, 0x29,
    0x3, 0x28, 0x55, 0x29, 0x3, 0x28, 0x56, 0x29, 0x3, 0x28, 0x57, 0x29,
    0x3, 0x28, 0x58, 0x29, 0x3, 0x28, 0x59, 0x29, 0x3, 0x28, 0x5a, 0x29,
    0x3, 0x3014, 0x53, 0x3015, 0x2, 0x43, 0x44, 0x2, 0x57, 0x5a, 0x2, 0x48,
    0x56, 0x2, 0x53, 0x44, 0x2, 0x53, 0x53, 0x3, 0x50, 0x50, 0x56, 0x2,
    0x57, 0x43, 0x2, 0x4d, 0x43, 0x2, 0x4d, 0x44, 0x2, 0x4d, 0x52, 0x2,
    0x44, 0x4a, 0x2, 0x307b, 0x304b, 0x2, 0x30b3, 0x30b3, 0x1, 0x5b57, 0x1, 0x53cc,
    0x1, 0x591a, 0x1, 0x89e3, 0x1, 0x4ea4, 0x1, 0x6620, 0x1, 0x7121, 0x1, 0x524d,
    0x1, 0x5f8c, 0x1, 0x518d, 0x1, 0x65b0, 0x1, 0x521d, 0x1, 0x7d42, 0x1, 0x8ca9,
    0x1, 0x58f0, 0x1, 0x5439, 0x1, 0x6f14, 0x1, 0x6295, 0x1, 0x6355, 0x1, 0x904a,
    0x1, 0x6307, 0x1, 0x6253, 0x1, 0x7981, 0x1, 0x7a7a, 0x1, 0x5408, 0x1, 0x6e80,
    0x1, 0x7533, 0x1, 0x5272, 0x1, 0x55b6, 0x1, 0x914d, 0x3, 0x3014, 0x672c, 0x3015,
    0x3, 0x3014, 0x4e09, 0x3015, 0x3, 0x3014, 0x4e8c, 0x3015, 0x3, 0x3014, 0x5b89, 0x3015,
    0x3, 0x3014, 0x70b9, 0x3015, 0x3, 0x3014, 0x6253, 0x3015, 0x3, 0x3014, 0x76d7, 0x3015,
    0x3, 0x3014, 0x52dd, 0x3015, 0x3, 0x3014, 0x6557, 0x3015, 0x1, 0x5f97, 0x1, 0x53ef,
    0x1, 0x4e3d, 0x1, 0x4e38, 0x1, 0x4e41, 0x1, 0x20122, 0x1, 0x4f60, 0x1, 0x4fbb,
    0x1, 0x5002, 0x1, 0x507a, 0x1, 0x5099, 0x1, 0x50cf, 0x1, 0x349e, 0x1, 0x2063a,
    0x1, 0x5154, 0x1, 0x5164, 0x1, 0x5177, 0x1, 0x2051c, 0x1, 0x34b9, 0x1, 0x5167,
    0x1, 0x2054b, 0x1, 0x5197, 0x1, 0x51a4, 0x1, 0x4ecc, 0x1, 0x51ac, 0x1, 0x291df,
    0x1, 0x5203, 0x1, 0x34df, 0x1, 0x523b, 0x1, 0x5246, 0x1, 0x5277, 0x1, 0x3515,
    0x1, 0x5305, 0x1, 0x5306, 0x1, 0x5349, 0x1, 0x535a, 0x1, 0x5373, 0x1, 0x537d,
    0x1, 0x537f, 0x1, 0x20a2c, 0x1, 0x7070, 0x1, 0x53ca, 0x1, 0x53df, 0x1, 0x20b63,
    0x1, 0x53eb, 0x1, 0x53f1, 0x1, 0x5406, 0x1, 0x549e, 0x1, 0x5438, 0x1, 0x5448,
    0x1, 0x5468, 0x1, 0x54a2, 0x1, 0x54f6, 0x1, 0x5510, 0x1, 0x5553, 0x1, 0x5563,
    0x1, 0x5584, 0x1, 0x55ab, 0x1, 0x55b3, 0x1, 0x55c2, 0x1, 0x5716, 0x1, 0x5717,
    0x1, 0x5651, 0x1, 0x5674, 0x1, 0x58ee, 0x1, 0x57ce, 0x1, 0x57f4, 0x1, 0x580d,
    0x1, 0x578b, 0x1, 0x5832, 0x1, 0x5831, 0x1, 0x58ac, 0x1, 0x214e4, 0x1, 0x58f2,
    0x1, 0x58f7, 0x1, 0x5906, 0x1, 0x5922, 0x1, 0x5962, 0x1, 0x216a8, 0x1, 0x216ea,
    0x1, 0x59ec, 0x1, 0x5a1b, 0x1, 0x5a27, 0x1, 0x59d8, 0x1, 0x5a66, 0x1, 0x36ee,
    0x1, 0x36fc, 0x1, 0x5b08, 0x1, 0x5b3e, 0x1, 0x219c8, 0x1, 0x5bc3, 0x1, 0x5bd8,
    0x1, 0x5bf3, 0x1, 0x21b18, 0x1, 0x5bff, 0x1, 0x5c06, 0x1, 0x5f53, 0x1, 0x3781,
    0x1, 0x5c60, 0x1, 0x5cc0, 0x1, 0x5c8d, 0x1, 0x21de4, 0x1, 0x5d43, 0x1, 0x21de6,
    0x1, 0x5d6e, 0x1, 0x5d6b, 0x1, 0x5d7c, 0x1, 0x5de1, 0x1, 0x5de2, 0x1, 0x382f,
    0x1, 0x5dfd, 0x1, 0x5e28, 0x1, 0x5e3d, 0x1, 0x5e69, 0x1, 0x3862, 0x1, 0x22183,
    0x1, 0x387c, 0x1, 0x5eb0, 0x1, 0x5eb3, 0x1, 0x5eb6, 0x1, 0x2a392, 0x1, 0x22331,
    0x1, 0x8201, 0x1, 0x5f22, 0x1, 0x38c7, 0x1, 0x232b8, 0x1, 0x261da, 0x1, 0x5f62,
    0x1, 0x5f6b, 0x1, 0x38e3, 0x1, 0x5f9a, 0x1, 0x5fcd, 0x1, 0x5fd7, 0x1, 0x5ff9,
    0x1, 0x6081, 0x1, 0x393a, 0x1, 0x391c, 0x1, 0x226d4, 0x1, 0x60c7, 0x1, 0x6148,
    0x1, 0x614c, 0x1, 0x617a, 0x1, 0x61b2, 0x1, 0x61a4, 0x1, 0x61af, 0x1, 0x61de,
    0x1, 0x6210, 0x1, 0x621b, 0x1, 0x625d, 0x1, 0x62b1, 0x1, 0x62d4, 0x1, 0x6350,
    0x1, 0x22b0c, 0x1, 0x633d, 0x1, 0x62fc, 0x1, 0x6368, 0x1, 0x6383, 0x1, 0x63e4,
    0x1, 0x22bf1, 0x1, 0x6422, 0x1, 0x63c5, 0x1, 0x63a9, 0x1, 0x3a2e, 0x1, 0x6469,
    0x1, 0x647e, 0x1, 0x649d, 0x1, 0x6477, 0x1, 0x3a6c, 0x1, 0x656c, 0x1, 0x2300a,
    0x1, 0x65e3, 0x1, 0x66f8, 0x1, 0x6649, 0x1, 0x3b19, 0x1, 0x3b08, 0x1, 0x3ae4,
    0x1, 0x5192, 0x1, 0x5195, 0x1, 0x6700, 0x1, 0x669c, 0x1, 0x80ad, 0x1, 0x43d9,
    0x1, 0x6721, 0x1, 0x675e, 0x1, 0x6753, 0x1, 0x233c3, 0x1, 0x3b49, 0x1, 0x67fa,
    0x1, 0x6785, 0x1, 0x6852, 0x1, 0x2346d, 0x1, 0x688e, 0x1, 0x681f, 0x1, 0x6914,
    0x1, 0x6942, 0x1, 0x69a3, 0x1, 0x69ea, 0x1, 0x6aa8, 0x1, 0x236a3, 0x1, 0x6adb,
    0x1, 0x3c18, 0x1, 0x6b21, 0x1, 0x238a7, 0x1, 0x6b54, 0x1, 0x3c4e, 0x1, 0x6b72,
    0x1, 0x6b9f, 0x1, 0x6bbb, 0x1, 0x23a8d, 0x1, 0x21d0b, 0x1, 0x23afa, 0x1, 0x6c4e,
    0x1, 0x23cbc, 0x1, 0x6cbf, 0x1, 0x6ccd, 0x1, 0x6c67, 0x1, 0x6d16, 0x1, 0x6d3e,
    0x1, 0x6d69, 0x1, 0x6d78, 0x1, 0x6d85, 0x1, 0x23d1e, 0x1, 0x6d34, 0x1, 0x6e2f,
    0x1, 0x6e6e, 0x1, 0x3d33, 0x1, 0x6ec7, 0x1, 0x23ed1, 0x1, 0x6df9, 0x1, 0x6f6e,
    0x1, 0x23f5e, 0x1, 0x23f8e, 0x1, 0x6fc6, 0x1, 0x7039, 0x1, 0x701b, 0x1, 0x3d96,
    0x1, 0x704a, 0x1, 0x707d, 0x1, 0x7077, 0x1, 0x70ad, 0x1, 0x20525, 0x1, 0x7145,
    0x1, 0x24263, 0x1, 0x719c, 0x1, 0x243ab, 0x1, 0x7228, 0x1, 0x7250, 0x1, 0x24608,
    0x1, 0x7280, 0x1, 0x7295, 0x1, 0x24735, 0x1, 0x24814, 0x1, 0x737a, 0x1, 0x738b,
    0x1, 0x3eac, 0x1, 0x73a5, 0x1, 0x3eb8, 0x1, 0x7447, 0x1, 0x745c, 0x1, 0x7485,
    0x1, 0x74ca, 0x1, 0x3f1b, 0x1, 0x7524, 0x1, 0x24c36, 0x1, 0x753e, 0x1, 0x24c92,
    0x1, 0x2219f, 0x1, 0x7610, 0x1, 0x24fa1, 0x1, 0x24fb8, 0x1, 0x25044, 0x1, 0x3ffc,
    0x1, 0x4008, 0x1, 0x250f3, 0x1, 0x250f2, 0x1, 0x25119, 0x1, 0x25133, 0x1, 0x771e,
    0x1, 0x771f, 0x1, 0x778b, 0x1, 0x4046, 0x1, 0x4096, 0x1, 0x2541d, 0x1, 0x784e,
    0x1, 0x40e3, 0x1, 0x25626, 0x1, 0x2569a, 0x1, 0x256c5, 0x1, 0x79eb, 0x1, 0x412f,
    0x1, 0x7a4a, 0x1, 0x7a4f, 0x1, 0x2597c, 0x1, 0x25aa7, 0x1, 0x7aee, 0x1, 0x4202,
    0x1, 0x25bab, 0x1, 0x7bc6, 0x1, 0x7bc9, 0x1, 0x4227, 0x1, 0x25c80, 0x1, 0x7cd2,
    0x1, 0x42a0, 0x1, 0x7ce8, 0x1, 0x7ce3, 0x1, 0x7d00, 0x1, 0x25f86, 0x1, 0x7d63,
    0x1, 0x4301, 0x1, 0x7dc7, 0x1, 0x7e02, 0x1, 0x7e45, 0x1, 0x4334, 0x1, 0x26228,
    0x1, 0x26247, 0x1, 0x4359, 0x1, 0x262d9, 0x1, 0x7f7a, 0x1, 0x2633e, 0x1, 0x7f95,
    0x1, 0x7ffa, 0x1, 0x264da, 0x1, 0x26523, 0x1, 0x8060, 0x1, 0x265a8, 0x1, 0x8070,
    0x1, 0x2335f, 0x1, 0x43d5, 0x1, 0x80b2, 0x1, 0x8103, 0x1, 0x440b, 0x1, 0x813e,
    0x1, 0x5ab5, 0x1, 0x267a7, 0x1, 0x267b5, 0x1, 0x23393, 0x1, 0x2339c, 0x1, 0x8204,
    0x1, 0x8f9e, 0x1, 0x446b, 0x1, 0x8291, 0x1, 0x828b, 0x1, 0x829d, 0x1, 0x52b3,
    0x1, 0x82b1, 0x1, 0x82b3, 0x1, 0x82bd, 0x1, 0x82e6, 0x1, 0x26b3c, 0x1, 0x831d,
    0x1, 0x8363, 0x1, 0x83ad, 0x1, 0x8323, 0x1, 0x83bd, 0x1, 0x83e7, 0x1, 0x8353,
    0x1, 0x83ca, 0x1, 0x83cc, 0x1, 0x83dc, 0x1, 0x26c36, 0x1, 0x26d6b, 0x1, 0x26cd5,
    0x1, 0x452b, 0x1, 0x84f1, 0x1, 0x84f3, 0x1, 0x8516, 0x1, 0x273ca, 0x1, 0x8564,
    0x1, 0x26f2c, 0x1, 0x455d, 0x1, 0x4561, 0x1, 0x26fb1, 0x1, 0x270d2, 0x1, 0x456b,
    0x1, 0x8650, 0x1, 0x8667, 0x1, 0x8669, 0x1, 0x86a9, 0x1, 0x8688, 0x1, 0x870e,
    0x1, 0x86e2, 0x1, 0x8728, 0x1, 0x876b, 0x1, 0x8786, 0x1, 0x45d7, 0x1, 0x87e1,
    0x1, 0x8801, 0x1, 0x45f9, 0x1, 0x8860, 0x1, 0x27667, 0x1, 0x88d7, 0x1, 0x88de,
    0x1, 0x4635, 0x1, 0x88fa, 0x1, 0x34bb, 0x1, 0x278ae, 0x1, 0x27966, 0x1, 0x46be,
    0x1, 0x46c7, 0x1, 0x8aa0, 0x1, 0x27ca8, 0x1, 0x8cab, 0x1, 0x8cc1, 0x1, 0x8d1b,
    0x1, 0x8d77, 0x1, 0x27f2f, 0x1, 0x20804, 0x1, 0x8dcb, 0x1, 0x8dbc, 0x1, 0x8df0,
    0x1, 0x208de, 0x1, 0x8ed4, 0x1, 0x285d2, 0x1, 0x285ed, 0x1, 0x9094, 0x1, 0x90f1,
    0x1, 0x9111, 0x1, 0x2872e, 0x1, 0x911b, 0x1, 0x9238, 0x1, 0x92d7, 0x1, 0x92d8,
    0x1, 0x927c, 0x1, 0x93f9, 0x1, 0x9415, 0x1, 0x28bfa, 0x1, 0x958b, 0x1, 0x4995,
    0x1, 0x95b7, 0x1, 0x28d77, 0x1, 0x49e6, 0x1, 0x96c3, 0x1, 0x5db2, 0x1, 0x9723,
    0x1, 0x29145, 0x1, 0x2921a, 0x1, 0x4a6e, 0x1, 0x4a76, 0x1, 0x97e0, 0x1, 0x2940a,
    0x1, 0x4ab2, 0x1, 0x29496, 0x1, 0x9829, 0x1, 0x295b6, 0x1, 0x98e2, 0x1, 0x4b33,
    0x1, 0x9929, 0x1, 0x99a7, 0x1, 0x99c2, 0x1, 0x99fe, 0x1, 0x4bce, 0x1, 0x29b30,
    0x1, 0x9c40, 0x1, 0x9cfd, 0x1, 0x4cce, 0x1, 0x4ced, 0x1, 0x9d67, 0x1, 0x2a0ce,
    0x1, 0x4cf8, 0x1, 0x2a105, 0x1, 0x2a20e, 0x1, 0x2a291, 0x1, 0x4d56, 0x1, 0x9efe,
    0x1, 0x9f05, 0x1, 0x9f0f, 0x1, 0x9f16, 0x1, 0x2a600,
];

pub static CANONICAL_KEYS: &[(u32, u32)] = &[
    (0xc0, 38), (0xc1, 41), (0xc2, 44), (0xc3, 47), (0xc4, 50), (0xc5, 53),
    (0xc7, 56), (0xc8, 59), (0xc9, 62), (0xca, 65), (0xcb, 68), (0xcc, 71),
    (0xcd, 74), (0xce, 77), (0xcf, 80), (0xd1, 83), (0xd2, 86), (0xd3, 89),
    (0xd4, 92), (0xd5, 95), (0xd6, 98), (0xd9, 101), (0xda, 104), (0xdb, 107),
    (0xdc, 110), (0xdd, 113), (0xe0, 116), (0xe1, 119), (0xe2, 122), (0xe3, 125),
    (0xe4, 128), (0xe5, 131), (0xe7, 134), (0xe8, 137), (0xe9, 140), (0xea, 143),
    (0xeb, 146), (0xec, 149), (0xed, 152), (0xee, 155), (0xef, 158), (0xf1, 161),
    (0xf2, 164), (0xf3, 167), (0xf4, 170), (0xf5, 173), (0xf6, 176), (0xf9, 179),
    (0xfa, 182), (0xfb, 185), (0xfc, 188), (0xfd, 191), (0xff, 194), (0x100, 197),
    (0x101, 200), (0x102, 203), (0x103, 206), (0x104, 209), (0x105, 212), (0x106, 215),
    (0x107, 218), (0x108, 221), (0x109, 224), (0x10a, 227), (0x10b, 230), (0x10c, 233),
    (0x10d, 236), (0x10e, 239), (0x10f, 242), (0x112, 245), (0x113, 248), (0x114, 251),
    (0x115, 254), (0x116, 257), (0x117, 260), (0x118, 263), (0x119, 266), (0x11a, 269),
    (0x11b, 272), (0x11c, 275), (0x11d, 278), (0x11e, 281), (0x11f, 284), (0x120, 287),
    (0x121, 290), (0x122, 293), (0x123, 296), (0x124, 299), (0x125, 302), (0x128, 305),
    (0x129, 308), (0x12a, 311), (0x12b, 314), (0x12c, 317), (0x12d, 320), (0x12e, 323),
    (0x12f, 326), (0x130, 329), (0x134, 338), (0x135, 341), (0x136, 344), (0x137, 347),
    (0x139, 350), (0x13a, 353), (0x13b, 356), (0x13c, 359), (0x13d, 362), (0x13e, 365),
    (0x143, 374), (0x144, 377), (0x145, 380), (0x146, 383), (0x147, 386), (0x148, 389),
    (0x14c, 395), (0x14d, 398), (0x14e, 401), (0x14f, 404), (0x150, 407), (0x151, 410),
    (0x154, 413), (0x155, 416), (0x156, 419), (0x157, 422), (0x158, 425), (0x159, 428),
    (0x15a, 431), (0x15b, 434), (0x15c, 437), (0x15d, 440), (0x15e, 443), (0x15f, 446),
    (0x160, 449), (0x161, 452), (0x162, 455), (0x163, 458), (0x164, 461), (0x165, 464),
    (0x168, 467), (0x169, 470), (0x16a, 473), (0x16b, 476), (0x16c, 479), (0x16d, 482),
    (0x16e, 485), (0x16f, 488), (0x170, 491), (0x171, 494), (0x172, 497), (0x173, 500),
    (0x174, 503), (0x175, 506), (0x176, 509), (0x177, 512), (0x178, 515), (0x179, 518),
    (0x17a, 521), (0x17b, 524), (0x17c, 527), (0x17d, 530), (0x17e, 533), (0x1a0, 538),
    (0x1a1, 541), (0x1af, 544), (0x1b0, 547), (0x1cd, 580), (0x1ce, 583), (0x1cf, 586),
    (0x1d0, 589), (0x1d1, 592), (0x1d2, 595), (0x1d3, 598), (0x1d4, 601), (0x1d5, 604),
    (0x1d6, 608), (0x1d7, 612), (0x1d8, 616), (0x1d9, 620), (0x1da, 624), (0x1db, 628),
    (0x1dc, 632), (0x1de, 636), (0x1df, 640), (0x1e0, 644), (0x1e1, 648), (0x1e2, 652),
    (0x1e3, 655), (0x1e6, 658), (0x1e7, 661), (0x1e8, 664), (0x1e9, 667), (0x1ea, 670),
    (0x1eb, 673), (0x1ec, 676), (0x1ed, 680), (0x1ee, 684), (0x1ef, 687), (0x1f0, 690),
    (0x1f4, 702), (0x1f5, 705), (0x1f8, 708), (0x1f9, 711), (0x1fa, 714), (0x1fb, 718),
    (0x1fc, 722), (0x1fd, 725), (0x1fe, 728), (0x1ff, 731), (0x200, 734), (0x201, 737),
    (0x202, 740), (0x203, 743), (0x204, 746), (0x205, 749), (0x206, 752), (0x207, 755),
    (0x208, 758), (0x209, 761), (0x20a, 764), (0x20b, 767), (0x20c, 770), (0x20d, 773),
    (0x20e, 776), (0x20f, 779), (0x210, 782), (0x211, 785), (0x212, 788), (0x213, 791),
    (0x214, 794), (0x215, 797), (0x216, 800), (0x217, 803), (0x218, 806), (0x219, 809),
    (0x21a, 812), (0x21b, 815), (0x21e, 818), (0x21f, 821), (0x226, 824), (0x227, 827),
    (0x228, 830), (0x229, 833), (0x22a, 836), (0x22b, 840), (0x22c, 844), (0x22d, 848),
    (0x22e, 852), (0x22f, 855), (0x230, 858), (0x231, 862), (0x232, 866), (0x233, 869),
    (0x340, 916), (0x341, 918), (0x343, 920), (0x344, 922), (0x374, 925), (0x37e, 930),
    (0x385, 932), (0x386, 939), (0x387, 942), (0x388, 944), (0x389, 947), (0x38a, 950),
    (0x38c, 953), (0x38e, 956), (0x38f, 959), (0x390, 962), (0x3aa, 966), (0x3ab, 969),
    (0x3ac, 972), (0x3ad, 975), (0x3ae, 978), (0x3af, 981), (0x3b0, 984), (0x3ca, 988),
    (0x3cb, 991), (0x3cc, 994), (0x3cd, 997), (0x3ce, 1000), (0x3d3, 1009), (0x3d4, 1012),
    (0x400, 1031), (0x401, 1034), (0x403, 1037), (0x407, 1040), (0x40c, 1043), (0x40d, 1046),
    (0x40e, 1049), (0x419, 1052), (0x439, 1055), (0x450, 1058), (0x451, 1061), (0x453, 1064),
    (0x457, 1067), (0x45c, 1070), (0x45d, 1073), (0x45e, 1076), (0x476, 1079), (0x477, 1082),
    (0x4c1, 1085), (0x4c2, 1088), (0x4d0, 1091), (0x4d1, 1094), (0x4d2, 1097), (0x4d3, 1100),
    (0x4d6, 1103), (0x4d7, 1106), (0x4da, 1109), (0x4db, 1112), (0x4dc, 1115), (0x4dd, 1118),
    (0x4de, 1121), (0x4df, 1124), (0x4e2, 1127), (0x4e3, 1130), (0x4e4, 1133), (0x4e5, 1136),
    (0x4e6, 1139), (0x4e7, 1142), (0x4ea, 1145), (0x4eb, 1148), (0x4ec, 1151), (0x4ed, 1154),
    (0x4ee, 1157), (0x4ef, 1160), (0x4f0, 1163), (0x4f1, 1166), (0x4f2, 1169), (0x4f3, 1172),
    (0x4f4, 1175), (0x4f5, 1178), (0x4f8, 1181), (0x4f9, 1184), (0x622, 1190), (0x623, 1193),
    (0x624, 1196), (0x625, 1199), (0x626, 1202), (0x6c0, 1217), (0x6c2, 1220), (0x6d3, 1223),
    (0x929, 1226), (0x931, 1229), (0x934, 1232), (0x958, 1235), (0x959, 1238), (0x95a, 1241),
    (0x95b, 1244), (0x95c, 1247), (0x95d, 1250), (0x95e, 1253), (0x95f, 1256), (0x9cb, 1259),
    (0x9cc, 1262), (0x9dc, 1265), (0x9dd, 1268), (0x9df, 1271), (0xa33, 1274), (0xa36, 1277),
    (0xa59, 1280), (0xa5a, 1283), (0xa5b, 1286), (0xa5e, 1289), (0xb48, 1292), (0xb4b, 1295),
    (0xb4c, 1298), (0xb5c, 1301), (0xb5d, 1304), (0xb94, 1307), (0xbca, 1310), (0xbcb, 1313),
    (0xbcc, 1316), (0xc48, 1319), (0xcc0, 1322), (0xcc7, 1325), (0xcc8, 1328), (0xcca, 1331),
    (0xccb, 1334), (0xd4a, 1338), (0xd4b, 1341), (0xd4c, 1344), (0xdda, 1347), (0xddc, 1350),
    (0xddd, 1353), (0xdde, 1357), (0xf43, 1374), (0xf4d, 1377), (0xf52, 1380), (0xf57, 1383),
    (0xf5c, 1386), (0xf69, 1389), (0xf73, 1392), (0xf75, 1395), (0xf76, 1398), (0xf78, 1405),
    (0xf81, 1412), (0xf93, 1415), (0xf9d, 1418), (0xfa2, 1421), (0xfa7, 1424), (0xfac, 1427),
    (0xfb9, 1430), (0x1026, 1433), (0x1b06, 1438), (0x1b08, 1441), (0x1b0a, 1444), (0x1b0c, 1447),
    (0x1b0e, 1450), (0x1b12, 1453), (0x1b3b, 1456), (0x1b3d, 1459), (0x1b40, 1462), (0x1b41, 1465),
    (0x1b43, 1468), (0x1e00, 1639), (0x1e01, 1642), (0x1e02, 1645), (0x1e03, 1648), (0x1e04, 1651),
    (0x1e05, 1654), (0x1e06, 1657), (0x1e07, 1660), (0x1e08, 1663), (0x1e09, 1667), (0x1e0a, 1671),
    (0x1e0b, 1674), (0x1e0c, 1677), (0x1e0d, 1680), (0x1e0e, 1683), (0x1e0f, 1686), (0x1e10, 1689),
    (0x1e11, 1692), (0x1e12, 1695), (0x1e13, 1698), (0x1e14, 1701), (0x1e15, 1705), (0x1e16, 1709),
    (0x1e17, 1713), (0x1e18, 1717), (0x1e19, 1720), (0x1e1a, 1723), (0x1e1b, 1726), (0x1e1c, 1729),
    (0x1e1d, 1733), (0x1e1e, 1737), (0x1e1f, 1740), (0x1e20, 1743), (0x1e21, 1746), (0x1e22, 1749),
    (0x1e23, 1752), (0x1e24, 1755), (0x1e25, 1758), (0x1e26, 1761), (0x1e27, 1764), (0x1e28, 1767),
    (0x1e29, 1770), (0x1e2a, 1773), (0x1e2b, 1776), (0x1e2c, 1779), (0x1e2d, 1782), (0x1e2e, 1785),
    (0x1e2f, 1789), (0x1e30, 1793), (0x1e31, 1796), (0x1e32, 1799), (0x1e33, 1802), (0x1e34, 1805),
    (0x1e35, 1808), (0x1e36, 1811), (0x1e37, 1814), (0x1e38, 1817), (0x1e39, 1821), (0x1e3a, 1825),
    (0x1e3b, 1828), (0x1e3c, 1831), (0x1e3d, 1834), (0x1e3e, 1837), (0x1e3f, 1840), (0x1e40, 1843),
    (0x1e41, 1846), (0x1e42, 1849), (0x1e43, 1852), (0x1e44, 1855), (0x1e45, 1858), (0x1e46, 1861),
    (0x1e47, 1864), (0x1e48, 1867), (0x1e49, 1870), (0x1e4a, 1873), (0x1e4b, 1876), (0x1e4c, 1879),
    (0x1e4d, 1883), (0x1e4e, 1887), (0x1e4f, 1891), (0x1e50, 1895), (0x1e51, 1899), (0x1e52, 1903),
    (0x1e53, 1907), (0x1e54, 1911), (0x1e55, 1914), (0x1e56, 1917), (0x1e57, 1920), (0x1e58, 1923),
    (0x1e59, 1926), (0x1e5a, 1929), (0x1e5b, 1932), (0x1e5c, 1935), (0x1e5d, 1939), (0x1e5e, 1943),
    (0x1e5f, 1946), (0x1e60, 1949), (0x1e61, 1952), (0x1e62, 1955), (0x1e63, 1958), (0x1e64, 1961),
    (0x1e65, 1965), (0x1e66, 1969), (0x1e67, 1973), (0x1e68, 1977), (0x1e69, 1981), (0x1e6a, 1985),
    (0x1e6b, 1988), (0x1e6c, 1991), (0x1e6d, 1994), (0x1e6e, 1997), (0x1e6f, 2000), (0x1e70, 2003),
    (0x1e71, 2006), (0x1e72, 2009), (0x1e73, 2012), (0x1e74, 2015), (0x1e75, 2018), (0x1e76, 2021),
    (0x1e77, 2024), (0x1e78, 2027), (0x1e79, 2031), (0x1e7a, 2035), (0x1e7b, 2039), (0x1e7c, 2043),
    (0x1e7d, 2046), (0x1e7e, 2049), (0x1e7f, 2052), (0x1e80, 2055), (0x1e81, 2058), (0x1e82, 2061),
    (0x1e83, 2064), (0x1e84, 2067), (0x1e85, 2070), (0x1e86, 2073), (0x1e87, 2076), (0x1e88, 2079),
    (0x1e89, 2082), (0x1e8a, 2085), (0x1e8b, 2088), (0x1e8c, 2091), (0x1e8d, 2094), (0x1e8e, 2097),
    (0x1e8f, 2100), (0x1e90, 2103), (0x1e91, 2106), (0x1e92, 2109), (0x1e93, 2112), (0x1e94, 2115),
    (0x1e95, 2118), (0x1e96, 2121), (0x1e97, 2124), (0x1e98, 2127), (0x1e99, 2130), (0x1e9b, 2136),
    (0x1ea0, 2139), (0x1ea1, 2142), (0x1ea2, 2145), (0x1ea3, 2148), (0x1ea4, 2151), (0x1ea5, 2155),
    (0x1ea6, 2159), (0x1ea7, 2163), (0x1ea8, 2167), (0x1ea9, 2171), (0x1eaa, 2175), (0x1eab, 2179),
    (0x1eac, 2183), (0x1ead, 2187), (0x1eae, 2191), (0x1eaf, 2195), (0x1eb0, 2199), (0x1eb1, 2203),
    (0x1eb2, 2207), (0x1eb3, 2211), (0x1eb4, 2215), (0x1eb5, 2219), (0x1eb6, 2223), (0x1eb7, 2227),
    (0x1eb8, 2231), (0x1eb9, 2234), (0x1eba, 2237), (0x1ebb, 2240), (0x1ebc, 2243), (0x1ebd, 2246),
    (0x1ebe, 2249), (0x1ebf, 2253), (0x1ec0, 2257), (0x1ec1, 2261), (0x1ec2, 2265), (0x1ec3, 2269),
    (0x1ec4, 2273), (0x1ec5, 2277), (0x1ec6, 2281), (0x1ec7, 2285), (0x1ec8, 2289), (0x1ec9, 2292),
    (0x1eca, 2295), (0x1ecb, 2298), (0x1ecc, 2301), (0x1ecd, 2304), (0x1ece, 2307), (0x1ecf, 2310),
    (0x1ed0, 2313), (0x1ed1, 2317), (0x1ed2, 2321), (0x1ed3, 2325), (0x1ed4, 2329), (0x1ed5, 2333),
    (0x1ed6, 2337), (0x1ed7, 2341), (0x1ed8, 2345), (0x1ed9, 2349), (0x1eda, 2353), (0x1edb, 2357),
    (0x1edc, 2361), (0x1edd, 2365), (0x1ede, 2369), (0x1edf, 2373), (0x1ee0, 2377), (0x1ee1, 2381),
    (0x1ee2, 2385), (0x1ee3, 2389), (0x1ee4, 2393), (0x1ee5, 2396), (0x1ee6, 2399), (0x1ee7, 2402),
    (0x1ee8, 2405), (0x1ee9, 2409), (0x1eea, 2413), (0x1eeb, 2417), (0x1eec, 2421), (0x1eed, 2425),
    (0x1eee, 2429), (0x1eef, 2433), (0x1ef0, 2437), (0x1ef1, 2441), (0x1ef2, 2445), (0x1ef3, 2448),
    (0x1ef4, 2451), (0x1ef5, 2454), (0x1ef6, 2457), (0x1ef7, 2460), (0x1ef8, 2463), (0x1ef9, 2466),
    (0x1f00, 2469), (0x1f01, 2472), (0x1f02, 2475), (0x1f03, 2479), (0x1f04, 2483), (0x1f05, 2487),
    (0x1f06, 2491), (0x1f07, 2495), (0x1f08, 2499), (0x1f09, 2502), (0x1f0a, 2505), (0x1f0b, 2509),
    (0x1f0c, 2513), (0x1f0d, 2517), (0x1f0e, 2521), (0x1f0f, 2525), (0x1f10, 2529), (0x1f11, 2532),
    (0x1f12, 2535), (0x1f13, 2539), (0x1f14, 2543), (0x1f15, 2547), (0x1f18, 2551), (0x1f19, 2554),
    (0x1f1a, 2557), (0x1f1b, 2561), (0x1f1c, 2565), (0x1f1d, 2569), (0x1f20, 2573), (0x1f21, 2576),
    (0x1f22, 2579), (0x1f23, 2583), (0x1f24, 2587), (0x1f25, 2591), (0x1f26, 2595), (0x1f27, 2599),
    (0x1f28, 2603), (0x1f29, 2606), (0x1f2a, 2609), (0x1f2b, 2613), (0x1f2c, 2617), (0x1f2d, 2621),
    (0x1f2e, 2625), (0x1f2f, 2629), (0x1f30, 2633), (0x1f31, 2636), (0x1f32, 2639), (0x1f33, 2643),
    (0x1f34, 2647), (0x1f35, 2651), (0x1f36, 2655), (0x1f37, 2659), (0x1f38, 2663), (0x1f39, 2666),
    (0x1f3a, 2669), (0x1f3b, 2673), (0x1f3c, 2677), (0x1f3d, 2681), (0x1f3e, 2685), (0x1f3f, 2689),
    (0x1f40, 2693), (0x1f41, 2696), (0x1f42, 2699), (0x1f43, 2703), (0x1f44, 2707), (0x1f45, 2711),
    (0x1f48, 2715), (0x1f49, 2718), (0x1f4a, 2721), (0x1f4b, 2725), (0x1f4c, 2729), (0x1f4d, 2733),
    (0x1f50, 2737), (0x1f51, 2740), (0x1f52, 2743), (0x1f53, 2747), (0x1f54, 2751), (0x1f55, 2755),
    (0x1f56, 2759), (0x1f57, 2763), (0x1f59, 2767), (0x1f5b, 2770), (0x1f5d, 2774), (0x1f5f, 2778),
    (0x1f60, 2782), (0x1f61, 2785), (0x1f62, 2788), (0x1f63, 2792), (0x1f64, 2796), (0x1f65, 2800),
    (0x1f66, 2804), (0x1f67, 2808), (0x1f68, 2812), (0x1f69, 2815), (0x1f6a, 2818), (0x1f6b, 2822),
    (0x1f6c, 2826), (0x1f6d, 2830), (0x1f6e, 2834), (0x1f6f, 2838), (0x1f70, 2842), (0x1f71, 972),
    (0x1f72, 2845), (0x1f73, 975), (0x1f74, 2848), (0x1f75, 978), (0x1f76, 2851), (0x1f77, 981),
    (0x1f78, 2854), (0x1f79, 994), (0x1f7a, 2857), (0x1f7b, 997), (0x1f7c, 2860), (0x1f7d, 1000),
    (0x1f80, 2863), (0x1f81, 2867), (0x1f82, 2871), (0x1f83, 2876), (0x1f84, 2881), (0x1f85, 2886),
    (0x1f86, 2891), (0x1f87, 2896), (0x1f88, 2901), (0x1f89, 2905), (0x1f8a, 2909), (0x1f8b, 2914),
    (0x1f8c, 2919), (0x1f8d, 2924), (0x1f8e, 2929), (0x1f8f, 2934), (0x1f90, 2939), (0x1f91, 2943),
    (0x1f92, 2947), (0x1f93, 2952), (0x1f94, 2957), (0x1f95, 2962), (0x1f96, 2967), (0x1f97, 2972),
    (0x1f98, 2977), (0x1f99, 2981), (0x1f9a, 2985), (0x1f9b, 2990), (0x1f9c, 2995), (0x1f9d, 3000),
    (0x1f9e, 3005), (0x1f9f, 3010), (0x1fa0, 3015), (0x1fa1, 3019), (0x1fa2, 3023), (0x1fa3, 3028),
    (0x1fa4, 3033), (0x1fa5, 3038), (0x1fa6, 3043), (0x1fa7, 3048), (0x1fa8, 3053), (0x1fa9, 3057),
    (0x1faa, 3061), (0x1fab, 3066), (0x1fac, 3071), (0x1fad, 3076), (0x1fae, 3081), (0x1faf, 3086),
    (0x1fb0, 3091), (0x1fb1, 3094), (0x1fb2, 3097), (0x1fb3, 3101), (0x1fb4, 3104), (0x1fb6, 3108),
    (0x1fb7, 3111), (0x1fb8, 3115), (0x1fb9, 3118), (0x1fba, 3121), (0x1fbb, 939), (0x1fbc, 3124),
    (0x1fbe, 3130), (0x1fc1, 3135), (0x1fc2, 3142), (0x1fc3, 3146), (0x1fc4, 3149), (0x1fc6, 3153),
    (0x1fc7, 3156), (0x1fc8, 3160), (0x1fc9, 944), (0x1fca, 3163), (0x1fcb, 947), (0x1fcc, 3166),
    (0x1fcd, 3169), (0x1fce, 3176), (0x1fcf, 3183), (0x1fd0, 3190), (0x1fd1, 3193), (0x1fd2, 3196),
    (0x1fd3, 962), (0x1fd6, 3200), (0x1fd7, 3203), (0x1fd8, 3207), (0x1fd9, 3210), (0x1fda, 3213),
    (0x1fdb, 950), (0x1fdd, 3216), (0x1fde, 3223), (0x1fdf, 3230), (0x1fe0, 3237), (0x1fe1, 3240),
    (0x1fe2, 3243), (0x1fe3, 984), (0x1fe4, 3247), (0x1fe5, 3250), (0x1fe6, 3253), (0x1fe7, 3256),
    (0x1fe8, 3260), (0x1fe9, 3263), (0x1fea, 3266), (0x1feb, 956), (0x1fec, 3269), (0x1fed, 3272),
    (0x1fee, 932), (0x1fef, 3279), (0x1ff2, 3281), (0x1ff3, 3285), (0x1ff4, 3288), (0x1ff6, 3292),
    (0x1ff7, 3295), (0x1ff8, 3299), (0x1ff9, 953), (0x1ffa, 3302), (0x1ffb, 959), (0x1ffc, 3305),
    (0x1ffd, 3308), (0x2000, 3313), (0x2001, 3315), (0x2126, 3439), (0x212a, 1491), (0x212b, 53),
    (0x219a, 3597), (0x219b, 3600), (0x21ae, 3603), (0x21cd, 3606), (0x21ce, 3609), (0x21cf, 3612),
    (0x2204, 3615), (0x2209, 3618), (0x220c, 3621), (0x2224, 3624), (0x2226, 3627), (0x2241, 3644),
    (0x2244, 3647), (0x2247, 3650), (0x2249, 3653), (0x2260, 3656), (0x2262, 3659), (0x226d, 3662),
    (0x226e, 3665), (0x226f, 3668), (0x2270, 3671), (0x2271, 3674), (0x2274, 3677), (0x2275, 3680),
    (0x2278, 3683), (0x2279, 3686), (0x2280, 3689), (0x2281, 3692), (0x2284, 3695), (0x2285, 3698),
    (0x2288, 3701), (0x2289, 3704), (0x22ac, 3707), (0x22ad, 3710), (0x22ae, 3713), (0x22af, 3716),
    (0x22e0, 3719), (0x22e1, 3722), (0x22e2, 3725), (0x22e3, 3728), (0x22ea, 3731), (0x22eb, 3734),
    (0x22ec, 3737), (0x22ed, 3740), (0x2329, 3743), (0x232a, 3745), (0x2adc, 4068), (0x304c, 4511),
    (0x304e, 4514), (0x3050, 4517), (0x3052, 4520), (0x3054, 4523), (0x3056, 4526), (0x3058, 4529),
    (0x305a, 4532), (0x305c, 4535), (0x305e, 4538), (0x3060, 4541), (0x3062, 4544), (0x3065, 4547),
    (0x3067, 4550), (0x3069, 4553), (0x3070, 4556), (0x3071, 4559), (0x3073, 4562), (0x3074, 4565),
    (0x3076, 4568), (0x3077, 4571), (0x3079, 4574), (0x307a, 4577), (0x307c, 4580), (0x307d, 4583),
    (0x3094, 4586), (0x309e, 4595), (0x30ac, 4601), (0x30ae, 4604), (0x30b0, 4607), (0x30b2, 4610),
    (0x30b4, 4613), (0x30b6, 4616), (0x30b8, 4619), (0x30ba, 4622), (0x30bc, 4625), (0x30be, 4628),
    (0x30c0, 4631), (0x30c2, 4634), (0x30c5, 4637), (0x30c7, 4640), (0x30c9, 4643), (0x30d0, 4646),
    (0x30d1, 4649), (0x30d3, 4652), (0x30d4, 4655), (0x30d6, 4658), (0x30d7, 4661), (0x30d9, 4664),
    (0x30da, 4667), (0x30dc, 4670), (0x30dd, 4673), (0x30f4, 4676), (0x30f7, 4679), (0x30f8, 4682),
    (0x30f9, 4685), (0x30fa, 4688), (0x30fe, 4691), (0xf900, 6609), (0xf901, 6611), (0xf902, 4393),
    (0xf903, 6613), (0xf904, 6615), (0xf905, 6617), (0xf906, 6619), (0xf907, 4501), (0xf908, 4501),
    (0xf909, 6621), (0xf90a, 4409), (0xf90b, 6623), (0xf90c, 6625), (0xf90d, 6627), (0xf90e, 6629),
    (0xf90f, 6631), (0xf910, 6633), (0xf911, 6635), (0xf912, 6637), (0xf913, 6639), (0xf914, 6641),
    (0xf915, 6643), (0xf916, 6645), (0xf917, 6647), (0xf918, 6649), (0xf919, 6651), (0xf91a, 6653),
    (0xf91b, 6655), (0xf91c, 6657), (0xf91d, 6659), (0xf91e, 6661), (0xf91f, 6663), (0xf920, 6665),
    (0xf921, 6667), (0xf922, 6669), (0xf923, 6671), (0xf924, 6673), (0xf925, 6675), (0xf926, 6677),
    (0xf927, 6679), (0xf928, 6681), (0xf929, 6683), (0xf92a, 6685), (0xf92b, 6687), (0xf92c, 6689),
    (0xf92d, 6691), (0xf92e, 6693), (0xf92f, 6695), (0xf930, 6697), (0xf931, 6699), (0xf932, 6701),
    (0xf933, 6703), (0xf934, 4325), (0xf935, 6705), (0xf936, 6707), (0xf937, 6709), (0xf938, 6711),
    (0xf939, 6713), (0xf93a, 6715), (0xf93b, 6717), (0xf93c, 6719), (0xf93d, 6721), (0xf93e, 6723),
    (0xf93f, 6725), (0xf940, 4471), (0xf941, 6727), (0xf942, 6729), (0xf943, 6731), (0xf944, 6733),
    (0xf945, 6735), (0xf946, 6737), (0xf947, 6739), (0xf948, 6741), (0xf949, 6743), (0xf94a, 6745),
    (0xf94b, 6747), (0xf94c, 6749), (0xf94d, 6751), (0xf94e, 6753), (0xf94f, 6755), (0xf950, 6757),
    (0xf951, 6759), (0xf952, 6761), (0xf953, 6763), (0xf954, 6765), (0xf955, 6767), (0xf956, 6769),
    (0xf957, 6771), (0xf958, 6773), (0xf959, 6775), (0xf95a, 6777), (0xf95b, 6779), (0xf95c, 6641),
    (0xf95d, 6781), (0xf95e, 6783), (0xf95f, 6785), (0xf960, 6787), (0xf961, 6789), (0xf962, 6791),
    (0xf963, 6793), (0xf964, 6795), (0xf965, 6797), (0xf966, 6799), (0xf967, 6801), (0xf968, 6803),
    (0xf969, 6805), (0xf96a, 6807), (0xf96b, 6809), (0xf96c, 6811), (0xf96d, 6813), (0xf96e, 6815),
    (0xf96f, 6817), (0xf970, 6819), (0xf971, 4397), (0xf972, 6821), (0xf973, 6823), (0xf974, 6825),
    (0xf975, 6827), (0xf976, 6829), (0xf977, 6831), (0xf978, 6833), (0xf979, 6835), (0xf97a, 6837),
    (0xf97b, 6839), (0xf97c, 6841), (0xf97d, 6843), (0xf97e, 6845), (0xf97f, 6847), (0xf980, 6849),
    (0xf981, 4151), (0xf982, 6851), (0xf983, 6853), (0xf984, 6855), (0xf985, 6857), (0xf986, 6859),
    (0xf987, 6861), (0xf988, 6863), (0xf989, 6865), (0xf98a, 4113), (0xf98b, 6867), (0xf98c, 6869),
    (0xf98d, 6871), (0xf98e, 6873), (0xf98f, 6875), (0xf990, 6877), (0xf991, 6879), (0xf992, 6881),
    (0xf993, 6883), (0xf994, 6885), (0xf995, 6887), (0xf996, 6889), (0xf997, 6891), (0xf998, 6893),
    (0xf999, 6895), (0xf99a, 6897), (0xf99b, 6899), (0xf99c, 6901), (0xf99d, 6903), (0xf99e, 6905),
    (0xf99f, 6907), (0xf9a0, 6909), (0xf9a1, 6817), (0xf9a2, 6911), (0xf9a3, 6913), (0xf9a4, 6915),
    (0xf9a5, 6917), (0xf9a6, 6919), (0xf9a7, 6921), (0xf9a8, 6923), (0xf9a9, 6925), (0xf9aa, 6785),
    (0xf9ab, 6927), (0xf9ac, 6929), (0xf9ad, 6931), (0xf9ae, 6933), (0xf9af, 6935), (0xf9b0, 6937),
    (0xf9b1, 6939), (0xf9b2, 6941), (0xf9b3, 6943), (0xf9b4, 6945), (0xf9b5, 6947), (0xf9b6, 6949),
    (0xf9b7, 6951), (0xf9b8, 6953), (0xf9b9, 6955), (0xf9ba, 6957), (0xf9bb, 6959), (0xf9bc, 6961),
    (0xf9bd, 6963), (0xf9be, 6965), (0xf9bf, 6641), (0xf9c0, 6967), (0xf9c1, 6969), (0xf9c2, 6971),
    (0xf9c3, 6973), (0xf9c4, 4499), (0xf9c5, 6975), (0xf9c6, 6977), (0xf9c7, 6979), (0xf9c8, 6981),
    (0xf9c9, 6983), (0xf9ca, 6985), (0xf9cb, 6987), (0xf9cc, 6989), (0xf9cd, 6991), (0xf9ce, 6993),
    (0xf9cf, 6995), (0xf9d0, 6997), (0xf9d1, 5308), (0xf9d2, 6999), (0xf9d3, 7001), (0xf9d4, 7003),
    (0xf9d5, 7005), (0xf9d6, 7007), (0xf9d7, 7009), (0xf9d8, 7011), (0xf9d9, 7013), (0xf9da, 7015),
    (0xf9db, 6789), (0xf9dc, 7017), (0xf9dd, 7019), (0xf9de, 7021), (0xf9df, 7023), (0xf9e0, 7025),
    (0xf9e1, 7027), (0xf9e2, 7029), (0xf9e3, 7031), (0xf9e4, 7033), (0xf9e5, 7035), (0xf9e6, 7037),
    (0xf9e7, 7039), (0xf9e8, 7041), (0xf9e9, 4407), (0xf9ea, 7043), (0xf9eb, 7045), (0xf9ec, 7047),
    (0xf9ed, 7049), (0xf9ee, 7051), (0xf9ef, 7053), (0xf9f0, 7055), (0xf9f1, 7057), (0xf9f2, 7059),
    (0xf9f3, 7061), (0xf9f4, 7063), (0xf9f5, 7065), (0xf9f6, 7067), (0xf9f7, 4309), (0xf9f8, 7069),
    (0xf9f9, 7071), (0xf9fa, 7073), (0xf9fb, 7075), (0xf9fc, 7077), (0xf9fd, 7079), (0xf9fe, 7081),
    (0xf9ff, 7083), (0xfa00, 7085), (0xfa01, 7087), (0xfa02, 7089), (0xfa03, 7091), (0xfa04, 7093),
    (0xfa05, 7095), (0xfa06, 7097), (0xfa07, 7099), (0xfa08, 4363), (0xfa09, 7101), (0xfa0a, 4369),
    (0xfa0b, 7103), (0xfa0c, 7105), (0xfa0d, 7107), (0xfa10, 7109), (0xfa12, 7111), (0xfa15, 7113),
    (0xfa16, 7115), (0xfa17, 7117), (0xfa18, 7119), (0xfa19, 7121), (0xfa1a, 7123), (0xfa1b, 7125),
    (0xfa1c, 7127), (0xfa1d, 7129), (0xfa1e, 4323), (0xfa20, 7131), (0xfa22, 7133), (0xfa25, 7135),
    (0xfa26, 7137), (0xfa2a, 7139), (0xfa2b, 7141), (0xfa2c, 7143), (0xfa2d, 7145), (0xfa2e, 7147),
    (0xfa2f, 7149), (0xfa30, 7151), (0xfa31, 7153), (0xfa32, 7155), (0xfa33, 7157), (0xfa34, 7159),
    (0xfa35, 7161), (0xfa36, 7163), (0xfa37, 7165), (0xfa38, 7167), (0xfa39, 7169), (0xfa3a, 7171),
    (0xfa3b, 7173), (0xfa3c, 4165), (0xfa3d, 7175), (0xfa3e, 7177), (0xfa3f, 7179), (0xfa40, 7181),
    (0xfa41, 7183), (0xfa42, 7185), (0xfa43, 7187), (0xfa44, 7189), (0xfa45, 7191), (0xfa46, 7193),
    (0xfa47, 7195), (0xfa48, 7197), (0xfa49, 7199), (0xfa4a, 7201), (0xfa4b, 7203), (0xfa4c, 5318),
    (0xfa4d, 7205), (0xfa4e, 7207), (0xfa4f, 7209), (0xfa50, 7211), (0xfa51, 5326), (0xfa52, 7213),
    (0xfa53, 7215), (0xfa54, 7217), (0xfa55, 7219), (0xfa56, 7221), (0xfa57, 6889), (0xfa58, 7223),
    (0xfa59, 7225), (0xfa5a, 7227), (0xfa5b, 7229), (0xfa5c, 7231), (0xfa5d, 7233), (0xfa5e, 7233),
    (0xfa5f, 7235), (0xfa60, 7237), (0xfa61, 7239), (0xfa62, 7241), (0xfa63, 7243), (0xfa64, 7245),
    (0xfa65, 7247), (0xfa66, 7249), (0xfa67, 7135), (0xfa68, 7251), (0xfa69, 7253), (0xfa6a, 7255),
    (0xfa6b, 7257), (0xfa6c, 7259), (0xfa6d, 7261), (0xfa70, 7263), (0xfa71, 7265), (0xfa72, 7267),
    (0xfa73, 7269), (0xfa74, 7271), (0xfa75, 7273), (0xfa76, 7275), (0xfa77, 7277), (0xfa78, 7163),
    (0xfa79, 7279), (0xfa7a, 7281), (0xfa7b, 7283), (0xfa7c, 7109), (0xfa7d, 7285), (0xfa7e, 7287),
    (0xfa7f, 7289), (0xfa80, 7291), (0xfa81, 7293), (0xfa82, 7295), (0xfa83, 7297), (0xfa84, 7299),
    (0xfa85, 7301), (0xfa86, 7303), (0xfa87, 7305), (0xfa88, 7307), (0xfa89, 7179), (0xfa8a, 7309),
    (0xfa8b, 7181), (0xfa8c, 7311), (0xfa8d, 7313), (0xfa8e, 7315), (0xfa8f, 7317), (0xfa90, 7319),
    (0xfa91, 7111), (0xfa92, 6683), (0xfa93, 7321), (0xfa94, 7323), (0xfa95, 4231), (0xfa96, 6819),
    (0xfa97, 6985), (0xfa98, 7325), (0xfa99, 7327), (0xfa9a, 7195), (0xfa9b, 7329), (0xfa9c, 7197),
    (0xfa9d, 7331), (0xfa9e, 7333), (0xfa9f, 7335), (0xfaa0, 7115), (0xfaa1, 7337), (0xfaa2, 7339),
    (0xfaa3, 7341), (0xfaa4, 7343), (0xfaa5, 7345), (0xfaa6, 7117), (0xfaa7, 7347), (0xfaa8, 7349),
    (0xfaa9, 7351), (0xfaaa, 7353), (0xfaab, 7355), (0xfaac, 7357), (0xfaad, 7221), (0xfaae, 7359),
    (0xfaaf, 7361), (0xfab0, 6889), (0xfab1, 7363), (0xfab2, 7229), (0xfab3, 7365), (0xfab4, 7367),
    (0xfab5, 7369), (0xfab6, 7371), (0xfab7, 7373), (0xfab8, 7239), (0xfab9, 7375), (0xfaba, 7133),
    (0xfabb, 7377), (0xfabc, 7241), (0xfabd, 6781), (0xfabe, 7379), (0xfabf, 7243), (0xfac0, 7381),
    (0xfac1, 7247), (0xfac2, 7383), (0xfac3, 7385), (0xfac4, 7387), (0xfac5, 7389), (0xfac6, 7391),
    (0xfac7, 7251), (0xfac8, 7127), (0xfac9, 7393), (0xfaca, 7253), (0xfacb, 7395), (0xfacc, 7255),
    (0xfacd, 7397), (0xface, 4501), (0xfacf, 7399), (0xfad0, 7401), (0xfad1, 7403), (0xfad2, 7405),
    (0xfad3, 7407), (0xfad4, 7409), (0xfad5, 7411), (0xfad6, 7413), (0xfad7, 7415), (0xfad8, 7417),
    (0xfad9, 7419), (0xfb1d, 7456), (0xfb1f, 7459), (0xfb2a, 7476), (0xfb2b, 7479), (0xfb2c, 7482),
    (0xfb2d, 7486), (0xfb2e, 7490), (0xfb2f, 7493), (0xfb30, 7496), (0xfb31, 7499), (0xfb32, 7502),
    (0xfb33, 7505), (0xfb34, 7508), (0xfb35, 7511), (0xfb36, 7514), (0xfb38, 7517), (0xfb39, 7520),
    (0xfb3a, 7523), (0xfb3b, 7526), (0xfb3c, 7529), (0xfb3e, 7532), (0xfb40, 7535), (0xfb41, 7538),
    (0xfb43, 7541), (0xfb44, 7544), (0xfb46, 7547), (0xfb47, 7550), (0xfb48, 7553), (0xfb49, 7556),
    (0xfb4a, 7559), (0xfb4b, 7562), (0xfb4c, 7565), (0xfb4d, 7568), (0xfb4e, 7571), (0x1109a, 9010),
    (0x1109c, 9013), (0x110ab, 9016), (0x1112e, 9019), (0x1112f, 9022), (0x1134b, 9025), (0x1134c, 9028),
    (0x114bb, 9031), (0x114bc, 9034), (0x114be, 9037), (0x115ba, 9040), (0x115bb, 9043), (0x11938, 9046),
    (0x1d15e, 9049), (0x1d15f, 9052), (0x1d160, 9055), (0x1d161, 9059), (0x1d162, 9063), (0x1d163, 9067),
    (0x1d164, 9071), (0x1d1bb, 9075), (0x1d1bc, 9078), (0x1d1bd, 9081), (0x1d1be, 9085), (0x1d1bf, 9089),
    (0x1d1c0, 9093), (0x2f800, 9456), (0x2f801, 9458), (0x2f802, 9460), (0x2f803, 9462), (0x2f804, 9464),
    (0x2f805, 7151), (0x2f806, 9466), (0x2f807, 9468), (0x2f808, 9470), (0x2f809, 9472), (0x2f80a, 7153),
    (0x2f80b, 9474), (0x2f80c, 9476), (0x2f80d, 9478), (0x2f80e, 7155), (0x2f80f, 9480), (0x2f810, 9482),
    (0x2f811, 9484), (0x2f812, 9486), (0x2f813, 9488), (0x2f814, 9490), (0x2f815, 9374), (0x2f816, 9492),
    (0x2f817, 9494), (0x2f818, 9496), (0x2f819, 9498), (0x2f81a, 9500), (0x2f81b, 7265), (0x2f81c, 9502),
    (0x2f81d, 4109), (0x2f81e, 9504), (0x2f81f, 9506), (0x2f820, 9508), (0x2f821, 9510), (0x2f822, 9410),
    (0x2f823, 9512), (0x2f824, 9514), (0x2f825, 7275), (0x2f826, 7157), (0x2f827, 7159), (0x2f828, 7277),
    (0x2f829, 9516), (0x2f82a, 9518), (0x2f82b, 6793), (0x2f82c, 9520), (0x2f82d, 7161), (0x2f82e, 9522),
    (0x2f82f, 9524), (0x2f830, 9526), (0x2f831, 9528), (0x2f832, 9528), (0x2f833, 9528), (0x2f834, 9530),
    (0x2f835, 9532), (0x2f836, 9534), (0x2f837, 9536), (0x2f838, 9538), (0x2f839, 9540), (0x2f83a, 9542),
    (0x2f83b, 9544), (0x2f83c, 9546), (0x2f83d, 9548), (0x2f83e, 9550), (0x2f83f, 9552), (0x2f840, 9554),
    (0x2f841, 9556), (0x2f842, 9558), (0x2f843, 9560), (0x2f844, 9562), (0x2f845, 9564), (0x2f846, 9564),
    (0x2f847, 7281), (0x2f848, 9566), (0x2f849, 9568), (0x2f84a, 9570), (0x2f84b, 9572), (0x2f84c, 7165),
    (0x2f84d, 9574), (0x2f84e, 9576), (0x2f84f, 9578), (0x2f850, 7085), (0x2f851, 9580), (0x2f852, 9582),
    (0x2f853, 9584), (0x2f854, 9586), (0x2f855, 9588), (0x2f856, 9590), (0x2f857, 9592), (0x2f858, 9594),
    (0x2f859, 9596), (0x2f85a, 9598), (0x2f85b, 9600), (0x2f85c, 9602), (0x2f85d, 9360), (0x2f85e, 9604),
    (0x2f85f, 9606), (0x2f860, 9608), (0x2f861, 9610), (0x2f862, 9612), (0x2f863, 9614), (0x2f864, 9616),
    (0x2f865, 9618), (0x2f866, 9620), (0x2f867, 9622), (0x2f868, 9624), (0x2f869, 9626), (0x2f86a, 9628),
    (0x2f86b, 9628), (0x2f86c, 9630), (0x2f86d, 9632), (0x2f86e, 9634), (0x2f86f, 6785), (0x2f870, 9636),
    (0x2f871, 9638), (0x2f872, 9640), (0x2f873, 9642), (0x2f874, 9644), (0x2f875, 4161), (0x2f876, 9646),
    (0x2f877, 9648), (0x2f878, 4165), (0x2f879, 9650), (0x2f87a, 9652), (0x2f87b, 9654), (0x2f87c, 9656),
    (0x2f87d, 9658), (0x2f87e, 9660), (0x2f87f, 9662), (0x2f880, 9664), (0x2f881, 9666), (0x2f882, 9668),
    (0x2f883, 9670), (0x2f884, 9672), (0x2f885, 9674), (0x2f886, 9676), (0x2f887, 9678), (0x2f888, 9680),
    (0x2f889, 9682), (0x2f88a, 9684), (0x2f88b, 9686), (0x2f88c, 9688), (0x2f88d, 9690), (0x2f88e, 6681),
    (0x2f88f, 9692), (0x2f890, 4185), (0x2f891, 9694), (0x2f892, 9694), (0x2f893, 9696), (0x2f894, 9698),
    (0x2f895, 9698), (0x2f896, 9700), (0x2f897, 9702), (0x2f898, 9704), (0x2f899, 9706), (0x2f89a, 9708),
    (0x2f89b, 9710), (0x2f89c, 9712), (0x2f89d, 9714), (0x2f89e, 9716), (0x2f89f, 9718), (0x2f8a0, 9720),
    (0x2f8a1, 9722), (0x2f8a2, 9724), (0x2f8a3, 7175), (0x2f8a4, 9726), (0x2f8a5, 9728), (0x2f8a6, 9730),
    (0x2f8a7, 9732), (0x2f8a8, 7305), (0x2f8a9, 9732), (0x2f8aa, 9734), (0x2f8ab, 7179), (0x2f8ac, 9736),
    (0x2f8ad, 9738), (0x2f8ae, 9740), (0x2f8af, 9742), (0x2f8b0, 7181), (0x2f8b1, 6627), (0x2f8b2, 9744),
    (0x2f8b3, 9746), (0x2f8b4, 9748), (0x2f8b5, 9750), (0x2f8b6, 9752), (0x2f8b7, 9754), (0x2f8b8, 9756),
    (0x2f8b9, 9758), (0x2f8ba, 9760), (0x2f8bb, 9762), (0x2f8bc, 9764), (0x2f8bd, 9766), (0x2f8be, 9768),
    (0x2f8bf, 9770), (0x2f8c0, 9772), (0x2f8c1, 9774), (0x2f8c2, 9776), (0x2f8c3, 9778), (0x2f8c4, 9780),
    (0x2f8c5, 9782), (0x2f8c6, 9784), (0x2f8c7, 9786), (0x2f8c8, 7183), (0x2f8c9, 9788), (0x2f8ca, 9790),
    (0x2f8cb, 9792), (0x2f8cc, 9794), (0x2f8cd, 9796), (0x2f8ce, 9798), (0x2f8cf, 7187), (0x2f8d0, 9800),
    (0x2f8d1, 9802), (0x2f8d2, 9804), (0x2f8d3, 9806), (0x2f8d4, 9808), (0x2f8d5, 9810), (0x2f8d6, 9812),
    (0x2f8d7, 9814), (0x2f8d8, 6683), (0x2f8d9, 7321), (0x2f8da, 9816), (0x2f8db, 9818), (0x2f8dc, 9820),
    (0x2f8dd, 9822), (0x2f8de, 9824), (0x2f8df, 9826), (0x2f8e0, 9828), (0x2f8e1, 9830), (0x2f8e2, 7189),
    (0x2f8e3, 9832), (0x2f8e4, 9834), (0x2f8e5, 9836), (0x2f8e6, 9838), (0x2f8e7, 7405), (0x2f8e8, 9840),
    (0x2f8e9, 9842), (0x2f8ea, 9844), (0x2f8eb, 9846), (0x2f8ec, 9848), (0x2f8ed, 9850), (0x2f8ee, 9852),
    (0x2f8ef, 9854), (0x2f8f0, 9856), (0x2f8f1, 9858), (0x2f8f2, 9860), (0x2f8f3, 9862), (0x2f8f4, 9864),
    (0x2f8f5, 6819), (0x2f8f6, 9866), (0x2f8f7, 9868), (0x2f8f8, 9870), (0x2f8f9, 9872), (0x2f8fa, 9874),
    (0x2f8fb, 9876), (0x2f8fc, 9878), (0x2f8fd, 9880), (0x2f8fe, 9882), (0x2f8ff, 9884), (0x2f900, 9886),
    (0x2f901, 7191), (0x2f902, 6985), (0x2f903, 9888), (0x2f904, 9890), (0x2f905, 9892), (0x2f906, 9894),
    (0x2f907, 9896), (0x2f908, 9898), (0x2f909, 9900), (0x2f90a, 9902), (0x2f90b, 7327), (0x2f90c, 9904),
    (0x2f90d, 9906), (0x2f90e, 9908), (0x2f90f, 9910), (0x2f910, 9912), (0x2f911, 9914), (0x2f912, 9916),
    (0x2f913, 9918), (0x2f914, 7329), (0x2f915, 9920), (0x2f916, 9922), (0x2f917, 9924), (0x2f918, 9926),
    (0x2f919, 9928), (0x2f91a, 9930), (0x2f91b, 9932), (0x2f91c, 9934), (0x2f91d, 9936), (0x2f91e, 9938),
    (0x2f91f, 9940), (0x2f920, 9942), (0x2f921, 7333), (0x2f922, 9944), (0x2f923, 9946), (0x2f924, 9948),
    (0x2f925, 9950), (0x2f926, 9952), (0x2f927, 9954), (0x2f928, 9956), (0x2f929, 9958), (0x2f92a, 9960),
    (0x2f92b, 9962), (0x2f92c, 9964), (0x2f92d, 9964), (0x2f92e, 9966), (0x2f92f, 9968), (0x2f930, 7337),
    (0x2f931, 9970), (0x2f932, 9972), (0x2f933, 9974), (0x2f934, 9976), (0x2f935, 9978), (0x2f936, 9980),
    (0x2f937, 9982), (0x2f938, 6791), (0x2f939, 9984), (0x2f93a, 9986), (0x2f93b, 9988), (0x2f93c, 9990),
    (0x2f93d, 9992), (0x2f93e, 9994), (0x2f93f, 9996), (0x2f940, 7349), (0x2f941, 9998), (0x2f942, 10000),
    (0x2f943, 10002), (0x2f944, 10004), (0x2f945, 10006), (0x2f946, 10008), (0x2f947, 10008), (0x2f948, 7351),
    (0x2f949, 7409), (0x2f94a, 10010), (0x2f94b, 10012), (0x2f94c, 10014), (0x2f94d, 10016), (0x2f94e, 10018),
    (0x2f94f, 6717), (0x2f950, 7355), (0x2f951, 10020), (0x2f952, 10022), (0x2f953, 7211), (0x2f954, 10024),
    (0x2f955, 10026), (0x2f956, 7125), (0x2f957, 10028), (0x2f958, 10030), (0x2f959, 7217), (0x2f95a, 10032),
    (0x2f95b, 10034), (0x2f95c, 10036), (0x2f95d, 10038), (0x2f95e, 10038), (0x2f95f, 10040), (0x2f960, 10042),
    (0x2f961, 10044), (0x2f962, 10046), (0x2f963, 10048), (0x2f964, 10050), (0x2f965, 10052), (0x2f966, 10054),
    (0x2f967, 10056), (0x2f968, 10058), (0x2f969, 10060), (0x2f96a, 10062), (0x2f96b, 10064), (0x2f96c, 10066),
    (0x2f96d, 10068), (0x2f96e, 10070), (0x2f96f, 10072), (0x2f970, 10074), (0x2f971, 10076), (0x2f972, 10078),
    (0x2f973, 10080), (0x2f974, 10082), (0x2f975, 10084), (0x2f976, 10086), (0x2f977, 10088), (0x2f978, 10090),
    (0x2f979, 10092), (0x2f97a, 7229), (0x2f97b, 10094), (0x2f97c, 10096), (0x2f97d, 10098), (0x2f97e, 10100),
    (0x2f97f, 10102), (0x2f980, 10104), (0x2f981, 10106), (0x2f982, 10108), (0x2f983, 10110), (0x2f984, 10112),
    (0x2f985, 10114), (0x2f986, 10116), (0x2f987, 10118), (0x2f988, 10120), (0x2f989, 10122), (0x2f98a, 10124),
    (0x2f98b, 9696), (0x2f98c, 10126), (0x2f98d, 10128), (0x2f98e, 10130), (0x2f98f, 10132), (0x2f990, 10134),
    (0x2f991, 10136), (0x2f992, 10138), (0x2f993, 10140), (0x2f994, 10142), (0x2f995, 10144), (0x2f996, 10146),
    (0x2f997, 10148), (0x2f998, 6825), (0x2f999, 10150), (0x2f99a, 10152), (0x2f99b, 10154), (0x2f99c, 10156),
    (0x2f99d, 10158), (0x2f99e, 10160), (0x2f99f, 7235), (0x2f9a0, 10162), (0x2f9a1, 10164), (0x2f9a2, 10166),
    (0x2f9a3, 10168), (0x2f9a4, 10170), (0x2f9a5, 10172), (0x2f9a6, 10174), (0x2f9a7, 10176), (0x2f9a8, 10178),
    (0x2f9a9, 10180), (0x2f9aa, 10182), (0x2f9ab, 10184), (0x2f9ac, 10186), (0x2f9ad, 10188), (0x2f9ae, 10190),
    (0x2f9af, 10192), (0x2f9b0, 10194), (0x2f9b1, 10196), (0x2f9b2, 10198), (0x2f9b3, 10200), (0x2f9b4, 6707),
    (0x2f9b5, 10202), (0x2f9b6, 10204), (0x2f9b7, 10206), (0x2f9b8, 10208), (0x2f9b9, 10210), (0x2f9ba, 10212),
    (0x2f9bb, 7369), (0x2f9bc, 10214), (0x2f9bd, 10216), (0x2f9be, 10218), (0x2f9bf, 10220), (0x2f9c0, 10222),
    (0x2f9c1, 10224), (0x2f9c2, 10226), (0x2f9c3, 10228), (0x2f9c4, 4365), (0x2f9c5, 10230), (0x2f9c6, 10232),
    (0x2f9c7, 10234), (0x2f9c8, 10236), (0x2f9c9, 10238), (0x2f9ca, 10240), (0x2f9cb, 10242), (0x2f9cc, 10244),
    (0x2f9cd, 10246), (0x2f9ce, 10248), (0x2f9cf, 10250), (0x2f9d0, 7379), (0x2f9d1, 7381), (0x2f9d2, 4379),
    (0x2f9d3, 10252), (0x2f9d4, 10254), (0x2f9d5, 10256), (0x2f9d6, 10258), (0x2f9d7, 10260), (0x2f9d8, 10262),
    (0x2f9d9, 10264), (0x2f9da, 10266), (0x2f9db, 10268), (0x2f9dc, 10270), (0x2f9dd, 10272), (0x2f9de, 10274),
    (0x2f9df, 7383), (0x2f9e0, 10276), (0x2f9e1, 10278), (0x2f9e2, 10280), (0x2f9e3, 10282), (0x2f9e4, 10284),
    (0x2f9e5, 10286), (0x2f9e6, 10288), (0x2f9e7, 10290), (0x2f9e8, 10292), (0x2f9e9, 10294), (0x2f9ea, 10296),
    (0x2f9eb, 10298), (0x2f9ec, 10300), (0x2f9ed, 10302), (0x2f9ee, 10304), (0x2f9ef, 10306), (0x2f9f0, 10308),
    (0x2f9f1, 10310), (0x2f9f2, 10312), (0x2f9f3, 10314), (0x2f9f4, 10316), (0x2f9f5, 10318), (0x2f9f6, 10320),
    (0x2f9f7, 10322), (0x2f9f8, 10324), (0x2f9f9, 10326), (0x2f9fa, 10328), (0x2f9fb, 10330), (0x2f9fc, 10332),
    (0x2f9fd, 10334), (0x2f9fe, 7395), (0x2f9ff, 7395), (0x2fa00, 10336), (0x2fa01, 10338), (0x2fa02, 10340),
    (0x2fa03, 10342), (0x2fa04, 10344), (0x2fa05, 10346), (0x2fa06, 10348), (0x2fa07, 10350), (0x2fa08, 10352),
    (0x2fa09, 10354), (0x2fa0a, 7397), (0x2fa0b, 10356), (0x2fa0c, 10358), (0x2fa0d, 10360), (0x2fa0e, 10362),
    (0x2fa0f, 10364), (0x2fa10, 10366), (0x2fa11, 10368), (0x2fa12, 10370), (0x2fa13, 10372), (0x2fa14, 10374),
    (0x2fa15, 4475), (0x2fa16, 10376), (0x2fa17, 4483), (0x2fa18, 10378), (0x2fa19, 10380), (0x2fa1a, 10382),
    (0x2fa1b, 10384), (0x2fa1c, 4493), (0x2fa1d, 10386),
];

pub static COMPAT_KEYS: &[(u32, u32)] = &[
    (0xa0, 0), (0xa8, 2), (0xaa, 5), (0xaf, 7), (0xb2, 10), (0xb3, 12),
    (0xb4, 14), (0xb5, 17), (0xb8, 19), (0xb9, 22), (0xba, 24), (0xbc, 26),
    (0xbd, 30), (0xbe, 34), (0x132, 332), (0x133, 335), (0x13f, 368), (0x140, 371),
    (0x149, 392), (0x17f, 536), (0x1c4, 550), (0x1c5, 554), (0x1c6, 558), (0x1c7, 562),
    (0x1c8, 565), (0x1c9, 568), (0x1ca, 571), (0x1cb, 574), (0x1cc, 577), (0x1f1, 693),
    (0x1f2, 696), (0x1f3, 699), (0x2b0, 872), (0x2b1, 874), (0x2b2, 876), (0x2b3, 878),
    (0x2b4, 880), (0x2b5, 882), (0x2b6, 884), (0x2b7, 886), (0x2b8, 888), (0x2d8, 890),
    (0x2d9, 893), (0x2da, 896), (0x2db, 899), (0x2dc, 902), (0x2dd, 905), (0x2e0, 908),
    (0x2e1, 910), (0x2e2, 536), (0x2e3, 912), (0x2e4, 914), (0x37a, 927), (0x384, 14),
    (0x385, 935), (0x3d0, 1003), (0x3d1, 1005), (0x3d2, 1007), (0x3d3, 956), (0x3d4, 969),
    (0x3d5, 1015), (0x3d6, 1017), (0x3f0, 1019), (0x3f1, 1021), (0x3f2, 1023), (0x3f4, 1025),
    (0x3f5, 1027), (0x3f9, 1029), (0x587, 1187), (0x675, 1205), (0x676, 1208), (0x677, 1211),
    (0x678, 1214), (0xe33, 1360), (0xeb3, 1363), (0xedc, 1366), (0xedd, 1369), (0xf0c, 1372),
    (0xf77, 1401), (0xf79, 1408), (0x10fc, 1436), (0x1d2c, 1471), (0x1d2d, 1473), (0x1d2e, 1475),
    (0x1d30, 1477), (0x1d31, 1479), (0x1d32, 1481), (0x1d33, 1483), (0x1d34, 1485), (0x1d35, 1487),
    (0x1d36, 1489), (0x1d37, 1491), (0x1d38, 1493), (0x1d39, 1495), (0x1d3a, 1497), (0x1d3c, 1499),
    (0x1d3d, 1501), (0x1d3e, 1503), (0x1d3f, 1505), (0x1d40, 1507), (0x1d41, 1509), (0x1d42, 1511),
    (0x1d43, 5), (0x1d44, 1513), (0x1d45, 1515), (0x1d46, 1517), (0x1d47, 1519), (0x1d48, 1521),
    (0x1d49, 1523), (0x1d4a, 1525), (0x1d4b, 1527), (0x1d4c, 1529), (0x1d4d, 1531), (0x1d4f, 1533),
    (0x1d50, 1535), (0x1d51, 1537), (0x1d52, 24), (0x1d53, 1539), (0x1d54, 1541), (0x1d55, 1543),
    (0x1d56, 1545), (0x1d57, 1547), (0x1d58, 1549), (0x1d59, 1551), (0x1d5a, 1553), (0x1d5b, 1555),
    (0x1d5c, 1557), (0x1d5d, 1003), (0x1d5e, 1559), (0x1d5f, 1561), (0x1d60, 1015), (0x1d61, 1563),
    (0x1d62, 1565), (0x1d63, 878), (0x1d64, 1549), (0x1d65, 1555), (0x1d66, 1003), (0x1d67, 1559),
    (0x1d68, 1021), (0x1d69, 1015), (0x1d6a, 1563), (0x1d78, 1567), (0x1d9b, 1569), (0x1d9c, 1571),
    (0x1d9d, 1573), (0x1d9e, 1575), (0x1d9f, 1529), (0x1da0, 1577), (0x1da1, 1579), (0x1da2, 1581),
    (0x1da3, 1583), (0x1da4, 1585), (0x1da5, 1587), (0x1da6, 1589), (0x1da7, 1591), (0x1da8, 1593),
    (0x1da9, 1595), (0x1daa, 1597), (0x1dab, 1599), (0x1dac, 1601), (0x1dad, 1603), (0x1dae, 1605),
    (0x1daf, 1607), (0x1db0, 1609), (0x1db1, 1611), (0x1db2, 1613), (0x1db3, 1615), (0x1db4, 1617),
    (0x1db5, 1619), (0x1db6, 1621), (0x1db7, 1623), (0x1db8, 1625), (0x1db9, 1627), (0x1dba, 1629),
    (0x1dbb, 1631), (0x1dbc, 1633), (0x1dbd, 1635), (0x1dbe, 1637), (0x1dbf, 1005), (0x1e9a, 2133),
    (0x1e9b, 1952), (0x1fbd, 3127), (0x1fbf, 3127), (0x1fc0, 3132), (0x1fc1, 3138), (0x1fcd, 3172),
    (0x1fce, 3179), (0x1fcf, 3186), (0x1fdd, 3219), (0x1fde, 3226), (0x1fdf, 3233), (0x1fed, 3275),
    (0x1fee, 935), (0x1ffd, 14), (0x1ffe, 3310), (0x2000, 0), (0x2001, 0), (0x2002, 0),
    (0x2003, 0), (0x2004, 0), (0x2005, 0), (0x2006, 0), (0x2007, 0), (0x2008, 0),
    (0x2009, 0), (0x200a, 0), (0x2011, 3317), (0x2017, 3319), (0x2024, 3322), (0x2025, 3324),
    (0x2026, 3327), (0x202f, 0), (0x2033, 3331), (0x2034, 3334), (0x2036, 3338), (0x2037, 3341),
    (0x203c, 3345), (0x203e, 3348), (0x2047, 3351), (0x2048, 3354), (0x2049, 3357), (0x2057, 3360),
    (0x205f, 0), (0x2070, 3365), (0x2071, 1565), (0x2074, 3367), (0x2075, 3369), (0x2076, 3371),
    (0x2077, 3373), (0x2078, 3375), (0x2079, 3377), (0x207a, 3379), (0x207b, 3381), (0x207c, 3383),
    (0x207d, 3385), (0x207e, 3387), (0x207f, 3389), (0x2080, 3365), (0x2081, 22), (0x2082, 10),
    (0x2083, 12), (0x2084, 3367), (0x2085, 3369), (0x2086, 3371), (0x2087, 3373), (0x2088, 3375),
    (0x2089, 3377), (0x208a, 3379), (0x208b, 3381), (0x208c, 3383), (0x208d, 3385), (0x208e, 3387),
    (0x2090, 5), (0x2091, 1523), (0x2092, 24), (0x2093, 912), (0x2094, 1525), (0x2095, 872),
    (0x2096, 1533), (0x2097, 910), (0x2098, 1535), (0x2099, 3389), (0x209a, 1545), (0x209b, 536),
    (0x209c, 1547), (0x20a8, 3391), (0x2100, 3394), (0x2101, 3398), (0x2102, 3402), (0x2103, 3404),
    (0x2105, 3407), (0x2106, 3411), (0x2107, 3415), (0x2109, 3417), (0x210a, 1531), (0x210b, 1485),
    (0x210c, 1485), (0x210d, 1485), (0x210e, 872), (0x210f, 3420), (0x2110, 1487), (0x2111, 1487),
    (0x2112, 1493), (0x2113, 910), (0x2115, 1497), (0x2116, 3422), (0x2119, 1503), (0x211a, 3425),
    (0x211b, 1505), (0x211c, 1505), (0x211d, 1505), (0x2120, 3427), (0x2121, 3430), (0x2122, 3434),
    (0x2124, 3437), (0x2128, 3437), (0x212c, 1475), (0x212d, 3402), (0x212f, 1523), (0x2130, 1479),
    (0x2131, 3441), (0x2133, 1495), (0x2134, 24), (0x2135, 3443), (0x2136, 3445), (0x2137, 3447),
    (0x2138, 3449), (0x2139, 1565), (0x213b, 3451), (0x213c, 1017), (0x213d, 1559), (0x213e, 3455),
    (0x213f, 3457), (0x2140, 3459), (0x2145, 1477), (0x2146, 1521), (0x2147, 1523), (0x2148, 1565),
    (0x2149, 876), (0x2150, 3461), (0x2151, 3465), (0x2152, 3469), (0x2153, 3474), (0x2154, 3478),
    (0x2155, 3482), (0x2156, 3486), (0x2157, 3490), (0x2158, 3494), (0x2159, 3498), (0x215a, 3502),
    (0x215b, 3506), (0x215c, 3510), (0x215d, 3514), (0x215e, 3518), (0x215f, 3522), (0x2160, 1487),
    (0x2161, 3525), (0x2162, 3528), (0x2163, 3532), (0x2164, 3535), (0x2165, 3537), (0x2166, 3540),
    (0x2167, 3544), (0x2168, 3549), (0x2169, 3552), (0x216a, 3554), (0x216b, 3557), (0x216c, 1493),
    (0x216d, 3402), (0x216e, 1477), (0x216f, 1495), (0x2170, 1565), (0x2171, 3561), (0x2172, 3564),
    (0x2173, 3568), (0x2174, 1555), (0x2175, 3571), (0x2176, 3574), (0x2177, 3578), (0x2178, 3583),
    (0x2179, 912), (0x217a, 3586), (0x217b, 3589), (0x217c, 910), (0x217d, 1571), (0x217e, 1521),
    (0x217f, 1535), (0x2189, 3593), (0x222c, 3630), (0x222d, 3633), (0x222f, 3637), (0x2230, 3640),
    (0x2460, 22), (0x2461, 10), (0x2462, 12), (0x2463, 3367), (0x2464, 3369), (0x2465, 3371),
    (0x2466, 3373), (0x2467, 3375), (0x2468, 3377), (0x2469, 3747), (0x246a, 3750), (0x246b, 3753),
    (0x246c, 3756), (0x246d, 3759), (0x246e, 3762), (0x246f, 3765), (0x2470, 3768), (0x2471, 3771),
    (0x2472, 3774), (0x2473, 3777), (0x2474, 3780), (0x2475, 3784), (0x2476, 3788), (0x2477, 3792),
    (0x2478, 3796), (0x2479, 3800), (0x247a, 3804), (0x247b, 3808), (0x247c, 3812), (0x247d, 3816),
    (0x247e, 3821), (0x247f, 3826), (0x2480, 3831), (0x2481, 3836), (0x2482, 3841), (0x2483, 3846),
    (0x2484, 3851), (0x2485, 3856), (0x2486, 3861), (0x2487, 3866), (0x2488, 3871), (0x2489, 3874),
    (0x248a, 3877), (0x248b, 3880), (0x248c, 3883), (0x248d, 3886), (0x248e, 3889), (0x248f, 3892),
    (0x2490, 3895), (0x2491, 3898), (0x2492, 3902), (0x2493, 3906), (0x2494, 3910), (0x2495, 3914),
    (0x2496, 3918), (0x2497, 3922), (0x2498, 3926), (0x2499, 3930), (0x249a, 3934), (0x249b, 3938),
    (0x249c, 3942), (0x249d, 3946), (0x249e, 3950), (0x249f, 3954), (0x24a0, 3958), (0x24a1, 3962),
    (0x24a2, 3966), (0x24a3, 3970), (0x24a4, 3974), (0x24a5, 3978), (0x24a6, 3982), (0x24a7, 3986),
    (0x24a8, 3990), (0x24a9, 3994), (0x24aa, 3998), (0x24ab, 4002), (0x24ac, 4006), (0x24ad, 4010),
    (0x24ae, 4014), (0x24af, 4018), (0x24b0, 4022), (0x24b1, 4026), (0x24b2, 4030), (0x24b3, 4034),
    (0x24b4, 4038), (0x24b5, 4042), (0x24b6, 1471), (0x24b7, 1475), (0x24b8, 3402), (0x24b9, 1477),
    (0x24ba, 1479), (0x24bb, 3441), (0x24bc, 1483), (0x24bd, 1485), (0x24be, 1487), (0x24bf, 1489),
    (0x24c0, 1491), (0x24c1, 1493), (0x24c2, 1495), (0x24c3, 1497), (0x24c4, 1499), (0x24c5, 1503),
    (0x24c6, 3425), (0x24c7, 1505), (0x24c8, 4046), (0x24c9, 1507), (0x24ca, 1509), (0x24cb, 3535),
    (0x24cc, 1511), (0x24cd, 3552), (0x24ce, 4048), (0x24cf, 3437), (0x24d0, 5), (0x24d1, 1519),
    (0x24d2, 1571), (0x24d3, 1521), (0x24d4, 1523), (0x24d5, 1577), (0x24d6, 1531), (0x24d7, 872),
    (0x24d8, 1565), (0x24d9, 876), (0x24da, 1533), (0x24db, 910), (0x24dc, 1535), (0x24dd, 3389),
    (0x24de, 24), (0x24df, 1545), (0x24e0, 4050), (0x24e1, 878), (0x24e2, 536), (0x24e3, 1547),
    (0x24e4, 1549), (0x24e5, 1555), (0x24e6, 886), (0x24e7, 912), (0x24e8, 888), (0x24e9, 1631),
    (0x24ea, 3365), (0x2a0c, 4052), (0x2a74, 4057), (0x2a75, 4061), (0x2a76, 4064), (0x2c7c, 876),
    (0x2c7d, 3535), (0x2d6f, 4071), (0x2e9f, 4073), (0x2ef3, 4075), (0x2f00, 4077), (0x2f01, 4079),
    (0x2f02, 4081), (0x2f03, 4083), (0x2f04, 4085), (0x2f05, 4087), (0x2f06, 4089), (0x2f07, 4091),
    (0x2f08, 4093), (0x2f09, 4095), (0x2f0a, 4097), (0x2f0b, 4099), (0x2f0c, 4101), (0x2f0d, 4103),
    (0x2f0e, 4105), (0x2f0f, 4107), (0x2f10, 4109), (0x2f11, 4111), (0x2f12, 4113), (0x2f13, 4115),
    (0x2f14, 4117), (0x2f15, 4119), (0x2f16, 4121), (0x2f17, 4123), (0x2f18, 4125), (0x2f19, 4127),
    (0x2f1a, 4129), (0x2f1b, 4131), (0x2f1c, 4133), (0x2f1d, 4135), (0x2f1e, 4137), (0x2f1f, 4139),
    (0x2f20, 4141), (0x2f21, 4143), (0x2f22, 4145), (0x2f23, 4147), (0x2f24, 4149), (0x2f25, 4151),
    (0x2f26, 4153), (0x2f27, 4155), (0x2f28, 4157), (0x2f29, 4159), (0x2f2a, 4161), (0x2f2b, 4163),
    (0x2f2c, 4165), (0x2f2d, 4167), (0x2f2e, 4169), (0x2f2f, 4171), (0x2f30, 4173), (0x2f31, 4175),
    (0x2f32, 4177), (0x2f33, 4179), (0x2f34, 4181), (0x2f35, 4183), (0x2f36, 4185), (0x2f37, 4187),
    (0x2f38, 4189), (0x2f39, 4191), (0x2f3a, 4193), (0x2f3b, 4195), (0x2f3c, 4197), (0x2f3d, 4199),
    (0x2f3e, 4201), (0x2f3f, 4203), (0x2f40, 4205), (0x2f41, 4207), (0x2f42, 4209), (0x2f43, 4211),
    (0x2f44, 4213), (0x2f45, 4215), (0x2f46, 4217), (0x2f47, 4219), (0x2f48, 4221), (0x2f49, 4223),
    (0x2f4a, 4225), (0x2f4b, 4227), (0x2f4c, 4229), (0x2f4d, 4231), (0x2f4e, 4233), (0x2f4f, 4235),
    (0x2f50, 4237), (0x2f51, 4239), (0x2f52, 4241), (0x2f53, 4243), (0x2f54, 4245), (0x2f55, 4247),
    (0x2f56, 4249), (0x2f57, 4251), (0x2f58, 4253), (0x2f59, 4255), (0x2f5a, 4257), (0x2f5b, 4259),
    (0x2f5c, 4261), (0x2f5d, 4263), (0x2f5e, 4265), (0x2f5f, 4267), (0x2f60, 4269), (0x2f61, 4271),
    (0x2f62, 4273), (0x2f63, 4275), (0x2f64, 4277), (0x2f65, 4279), (0x2f66, 4281), (0x2f67, 4283),
    (0x2f68, 4285), (0x2f69, 4287), (0x2f6a, 4289), (0x2f6b, 4291), (0x2f6c, 4293), (0x2f6d, 4295),
    (0x2f6e, 4297), (0x2f6f, 4299), (0x2f70, 4301), (0x2f71, 4303), (0x2f72, 4305), (0x2f73, 4307),
    (0x2f74, 4309), (0x2f75, 4311), (0x2f76, 4313), (0x2f77, 4315), (0x2f78, 4317), (0x2f79, 4319),
    (0x2f7a, 4321), (0x2f7b, 4323), (0x2f7c, 4325), (0x2f7d, 4327), (0x2f7e, 4329), (0x2f7f, 4331),
    (0x2f80, 4333), (0x2f81, 4335), (0x2f82, 4337), (0x2f83, 4339), (0x2f84, 4341), (0x2f85, 4343),
    (0x2f86, 4345), (0x2f87, 4347), (0x2f88, 4349), (0x2f89, 4351), (0x2f8a, 4353), (0x2f8b, 4355),
    (0x2f8c, 4357), (0x2f8d, 4359), (0x2f8e, 4361), (0x2f8f, 4363), (0x2f90, 4365), (0x2f91, 4367),
    (0x2f92, 4369), (0x2f93, 4371), (0x2f94, 4373), (0x2f95, 4375), (0x2f96, 4377), (0x2f97, 4379),
    (0x2f98, 4381), (0x2f99, 4383), (0x2f9a, 4385), (0x2f9b, 4387), (0x2f9c, 4389), (0x2f9d, 4391),
    (0x2f9e, 4393), (0x2f9f, 4395), (0x2fa0, 4397), (0x2fa1, 4399), (0x2fa2, 4401), (0x2fa3, 4403),
    (0x2fa4, 4405), (0x2fa5, 4407), (0x2fa6, 4409), (0x2fa7, 4411), (0x2fa8, 4413), (0x2fa9, 4415),
    (0x2faa, 4417), (0x2fab, 4419), (0x2fac, 4421), (0x2fad, 4423), (0x2fae, 4425), (0x2faf, 4427),
    (0x2fb0, 4429), (0x2fb1, 4431), (0x2fb2, 4433), (0x2fb3, 4435), (0x2fb4, 4437), (0x2fb5, 4439),
    (0x2fb6, 4441), (0x2fb7, 4443), (0x2fb8, 4445), (0x2fb9, 4447), (0x2fba, 4449), (0x2fbb, 4451),
    (0x2fbc, 4453), (0x2fbd, 4455), (0x2fbe, 4457), (0x2fbf, 4459), (0x2fc0, 4461), (0x2fc1, 4463),
    (0x2fc2, 4465), (0x2fc3, 4467), (0x2fc4, 4469), (0x2fc5, 4471), (0x2fc6, 4473), (0x2fc7, 4475),
    (0x2fc8, 4477), (0x2fc9, 4479), (0x2fca, 4481), (0x2fcb, 4483), (0x2fcc, 4485), (0x2fcd, 4487),
    (0x2fce, 4489), (0x2fcf, 4491), (0x2fd0, 4493), (0x2fd1, 4495), (0x2fd2, 4497), (0x2fd3, 4499),
    (0x2fd4, 4501), (0x2fd5, 4503), (0x3000, 0), (0x3036, 4505), (0x3038, 4123), (0x3039, 4507),
    (0x303a, 4509), (0x309b, 4589), (0x309c, 4592), (0x309f, 4598), (0x30ff, 4694), (0x3131, 4697),
    (0x3132, 4699), (0x3133, 4701), (0x3134, 4703), (0x3135, 4705), (0x3136, 4707), (0x3137, 4709),
    (0x3138, 4711), (0x3139, 4713), (0x313a, 4715), (0x313b, 4717), (0x313c, 4719), (0x313d, 4721),
    (0x313e, 4723), (0x313f, 4725), (0x3140, 4727), (0x3141, 4729), (0x3142, 4731), (0x3143, 4733),
    (0x3144, 4735), (0x3145, 4737), (0x3146, 4739), (0x3147, 4741), (0x3148, 4743), (0x3149, 4745),
    (0x314a, 4747), (0x314b, 4749), (0x314c, 4751), (0x314d, 4753), (0x314e, 4755), (0x314f, 4757),
    (0x3150, 4759), (0x3151, 4761), (0x3152, 4763), (0x3153, 4765), (0x3154, 4767), (0x3155, 4769),
    (0x3156, 4771), (0x3157, 4773), (0x3158, 4775), (0x3159, 4777), (0x315a, 4779), (0x315b, 4781),
    (0x315c, 4783), (0x315d, 4785), (0x315e, 4787), (0x315f, 4789), (0x3160, 4791), (0x3161, 4793),
    (0x3162, 4795), (0x3163, 4797), (0x3164, 4799), (0x3165, 4801), (0x3166, 4803), (0x3167, 4805),
    (0x3168, 4807), (0x3169, 4809), (0x316a, 4811), (0x316b, 4813), (0x316c, 4815), (0x316d, 4817),
    (0x316e, 4819), (0x316f, 4821), (0x3170, 4823), (0x3171, 4825), (0x3172, 4827), (0x3173, 4829),
    (0x3174, 4831), (0x3175, 4833), (0x3176, 4835), (0x3177, 4837), (0x3178, 4839), (0x3179, 4841),
    (0x317a, 4843), (0x317b, 4845), (0x317c, 4847), (0x317d, 4849), (0x317e, 4851), (0x317f, 4853),
    (0x3180, 4855), (0x3181, 4857), (0x3182, 4859), (0x3183, 4861), (0x3184, 4863), (0x3185, 4865),
    (0x3186, 4867), (0x3187, 4869), (0x3188, 4871), (0x3189, 4873), (0x318a, 4875), (0x318b, 4877),
    (0x318c, 4879), (0x318d, 4881), (0x318e, 4883), (0x3192, 4077), (0x3193, 4089), (0x3194, 4885),
    (0x3195, 4887), (0x3196, 4889), (0x3197, 4891), (0x3198, 4893), (0x3199, 4895), (0x319a, 4085),
    (0x319b, 4897), (0x319c, 4899), (0x319d, 4901), (0x319e, 4903), (0x319f, 4093), (0x3200, 4905),
    (0x3201, 4909), (0x3202, 4913), (0x3203, 4917), (0x3204, 4921), (0x3205, 4925), (0x3206, 4929),
    (0x3207, 4933), (0x3208, 4937), (0x3209, 4941), (0x320a, 4945), (0x320b, 4949), (0x320c, 4953),
    (0x320d, 4957), (0x320e, 4961), (0x320f, 4966), (0x3210, 4971), (0x3211, 4976), (0x3212, 4981),
    (0x3213, 4986), (0x3214, 4991), (0x3215, 4996), (0x3216, 5001), (0x3217, 5006), (0x3218, 5011),
    (0x3219, 5016), (0x321a, 5021), (0x321b, 5026), (0x321c, 5031), (0x321d, 5036), (0x321e, 5044),
    (0x3220, 5051), (0x3221, 5055), (0x3222, 5059), (0x3223, 5063), (0x3224, 5067), (0x3225, 5071),
    (0x3226, 5075), (0x3227, 5079), (0x3228, 5083), (0x3229, 5087), (0x322a, 5091), (0x322b, 5095),
    (0x322c, 5099), (0x322d, 5103), (0x322e, 5107), (0x322f, 5111), (0x3230, 5115), (0x3231, 5119),
    (0x3232, 5123), (0x3233, 5127), (0x3234, 5131), (0x3235, 5135), (0x3236, 5139), (0x3237, 5143),
    (0x3238, 5147), (0x3239, 5151), (0x323a, 5155), (0x323b, 5159), (0x323c, 5163), (0x323d, 5167),
    (0x323e, 5171), (0x323f, 5175), (0x3240, 5179), (0x3241, 5183), (0x3242, 5187), (0x3243, 5191),
    (0x3244, 5195), (0x3245, 5197), (0x3246, 4209), (0x3247, 5199), (0x3250, 5201), (0x3251, 5205),
    (0x3252, 5208), (0x3253, 5211), (0x3254, 5214), (0x3255, 5217), (0x3256, 5220), (0x3257, 5223),
    (0x3258, 5226), (0x3259, 5229), (0x325a, 5232), (0x325b, 5235), (0x325c, 5238), (0x325d, 5241),
    (0x325e, 5244), (0x325f, 5247), (0x3260, 4697), (0x3261, 4703), (0x3262, 4709), (0x3263, 4713),
    (0x3264, 4729), (0x3265, 4731), (0x3266, 4737), (0x3267, 4741), (0x3268, 4743), (0x3269, 4747),
    (0x326a, 4749), (0x326b, 4751), (0x326c, 4753), (0x326d, 4755), (0x326e, 5250), (0x326f, 5253),
    (0x3270, 5256), (0x3271, 5259), (0x3272, 5262), (0x3273, 5265), (0x3274, 5268), (0x3275, 5271),
    (0x3276, 5274), (0x3277, 5277), (0x3278, 5280), (0x3279, 5283), (0x327a, 5286), (0x327b, 5289),
    (0x327c, 5292), (0x327d, 5298), (0x327e, 5303), (0x3280, 4077), (0x3281, 4089), (0x3282, 4885),
    (0x3283, 4887), (0x3284, 5306), (0x3285, 5308), (0x3286, 5310), (0x3287, 4099), (0x3288, 5312),
    (0x3289, 4123), (0x328a, 4223), (0x328b, 4247), (0x328c, 4245), (0x328d, 4225), (0x328e, 4409),
    (0x328f, 4139), (0x3290, 4219), (0x3291, 5314), (0x3292, 5316), (0x3293, 5318), (0x3294, 5320),
    (0x3295, 5322), (0x3296, 5324), (0x3297, 5326), (0x3298, 5328), (0x3299, 5330), (0x329a, 5332),
    (0x329b, 4151), (0x329c, 5334), (0x329d, 5336), (0x329e, 5338), (0x329f, 5340), (0x32a0, 5342),
    (0x32a1, 5344), (0x32a2, 5346), (0x32a3, 5348), (0x32a4, 4889), (0x32a5, 4891), (0x32a6, 4893),
    (0x32a7, 5350), (0x32a8, 5352), (0x32a9, 5354), (0x32aa, 5356), (0x32ab, 5358), (0x32ac, 5360),
    (0x32ad, 5362), (0x32ae, 5364), (0x32af, 5366), (0x32b0, 5368), (0x32b1, 5370), (0x32b2, 5373),
    (0x32b3, 5376), (0x32b4, 5379), (0x32b5, 5382), (0x32b6, 5385), (0x32b7, 5388), (0x32b8, 5391),
    (0x32b9, 5394), (0x32ba, 5397), (0x32bb, 5400), (0x32bc, 5403), (0x32bd, 5406), (0x32be, 5409),
    (0x32bf, 5412), (0x32c0, 5415), (0x32c1, 5418), (0x32c2, 5421), (0x32c3, 5424), (0x32c4, 5427),
    (0x32c5, 5430), (0x32c6, 5433), (0x32c7, 5436), (0x32c8, 5439), (0x32c9, 5442), (0x32ca, 5446),
    (0x32cb, 5450), (0x32cc, 5454), (0x32cd, 5457), (0x32ce, 5461), (0x32cf, 5464), (0x32d0, 5468),
    (0x32d1, 5470), (0x32d2, 5472), (0x32d3, 5474), (0x32d4, 5476), (0x32d5, 5478), (0x32d6, 5480),
    (0x32d7, 5482), (0x32d8, 5484), (0x32d9, 5486), (0x32da, 5488), (0x32db, 5490), (0x32dc, 5492),
    (0x32dd, 5494), (0x32de, 5496), (0x32df, 5498), (0x32e0, 5500), (0x32e1, 5502), (0x32e2, 5504),
    (0x32e3, 5506), (0x32e4, 5508), (0x32e5, 5510), (0x32e6, 5512), (0x32e7, 5514), (0x32e8, 5516),
    (0x32e9, 5518), (0x32ea, 5520), (0x32eb, 5522), (0x32ec, 5524), (0x32ed, 5526), (0x32ee, 5528),
    (0x32ef, 5530), (0x32f0, 5532), (0x32f1, 5534), (0x32f2, 5536), (0x32f3, 5538), (0x32f4, 5540),
    (0x32f5, 5542), (0x32f6, 5544), (0x32f7, 5546), (0x32f8, 5548), (0x32f9, 5550), (0x32fa, 5552),
    (0x32fb, 5554), (0x32fc, 5556), (0x32fd, 5558), (0x32fe, 5560), (0x32ff, 5562), (0x3300, 5565),
    (0x3301, 5571), (0x3302, 5576), (0x3303, 5582), (0x3304, 5586), (0x3305, 5592), (0x3306, 5596),
    (0x3307, 5600), (0x3308, 5607), (0x3309, 5612), (0x330a, 5616), (0x330b, 5620), (0x330c, 5624),
    (0x330d, 5629), (0x330e, 5634), (0x330f, 5639), (0x3310, 5644), (0x3311, 5649), (0x3312, 5654),
    (0x3313, 5659), (0x3314, 5666), (0x3315, 5669), (0x3316, 5676), (0x3317, 5683), (0x3318, 5689),
    (0x3319, 5694), (0x331a, 5701), (0x331b, 5708), (0x331c, 5713), (0x331d, 5717), (0x331e, 5721),
    (0x331f, 5726), (0x3320, 5731), (0x3321, 5737), (0x3322, 5743), (0x3323, 5747), (0x3324, 5751),
    (0x3325, 5756), (0x3326, 5760), (0x3327, 5764), (0x3328, 5767), (0x3329, 5770), (0x332a, 5774),
    (0x332b, 5778), (0x332c, 5785), (0x332d, 5790), (0x332e, 5796), (0x332f, 5803), (0x3330, 5808),
    (0x3331, 5812), (0x3332, 5816), (0x3333, 5823), (0x3334, 5828), (0x3335, 5835), (0x3336, 5839),
    (0x3337, 5845), (0x3338, 5849), (0x3339, 5854), (0x333a, 5858), (0x333b, 5863), (0x333c, 5869),
    (0x333d, 5874), (0x333e, 5880), (0x333f, 5885), (0x3340, 5888), (0x3341, 5894), (0x3342, 5898),
    (0x3343, 5902), (0x3344, 5907), (0x3345, 5911), (0x3346, 5915), (0x3347, 5919), (0x3348, 5925),
    (0x3349, 5930), (0x334a, 5933), (0x334b, 5940), (0x334c, 5944), (0x334d, 5950), (0x334e, 5955),
    (0x334f, 5960), (0x3350, 5964), (0x3351, 5968), (0x3352, 5973), (0x3353, 5976), (0x3354, 5981),
    (0x3355, 5987), (0x3356, 5990), (0x3357, 5997), (0x3358, 6001), (0x3359, 6004), (0x335a, 6007),
    (0x335b, 6010), (0x335c, 6013), (0x335d, 6016), (0x335e, 6019), (0x335f, 6022), (0x3360, 6025),
    (0x3361, 6028), (0x3362, 6031), (0x3363, 6035), (0x3364, 6039), (0x3365, 6043), (0x3366, 6047),
    (0x3367, 6051), (0x3368, 6055), (0x3369, 6059), (0x336a, 6063), (0x336b, 6067), (0x336c, 6071),
    (0x336d, 6075), (0x336e, 6079), (0x336f, 6083), (0x3370, 6087), (0x3371, 6091), (0x3372, 6095),
    (0x3373, 6098), (0x3374, 6101), (0x3375, 6105), (0x3376, 6108), (0x3377, 6111), (0x3378, 6114),
    (0x3379, 6118), (0x337a, 6122), (0x337b, 6125), (0x337c, 6128), (0x337d, 6131), (0x337e, 6134),
    (0x337f, 6137), (0x3380, 6142), (0x3381, 6145), (0x3382, 6148), (0x3383, 6151), (0x3384, 6154),
    (0x3385, 6157), (0x3386, 6160), (0x3387, 6163), (0x3388, 6166), (0x3389, 6170), (0x338a, 6175),
    (0x338b, 6178), (0x338c, 6181), (0x338d, 6184), (0x338e, 6187), (0x338f, 6190), (0x3390, 6193),
    (0x3391, 6196), (0x3392, 6200), (0x3393, 6204), (0x3394, 6208), (0x3395, 6212), (0x3396, 6215),
    (0x3397, 6218), (0x3398, 6221), (0x3399, 6224), (0x339a, 6227), (0x339b, 6230), (0x339c, 6233),
    (0x339d, 6236), (0x339e, 6239), (0x339f, 6242), (0x33a0, 6246), (0x33a1, 6250), (0x33a2, 6253),
    (0x33a3, 6257), (0x33a4, 6261), (0x33a5, 6265), (0x33a6, 6268), (0x33a7, 6272), (0x33a8, 6276),
    (0x33a9, 6281), (0x33aa, 6284), (0x33ab, 6288), (0x33ac, 6292), (0x33ad, 6296), (0x33ae, 6300),
    (0x33af, 6306), (0x33b0, 6313), (0x33b1, 6316), (0x33b2, 6319), (0x33b3, 6322), (0x33b4, 6325),
    (0x33b5, 6328), (0x33b6, 6331), (0x33b7, 6334), (0x33b8, 6337), (0x33b9, 6340), (0x33ba, 6343),
    (0x33bb, 6346), (0x33bc, 6349), (0x33bd, 6352), (0x33be, 6355), (0x33bf, 6358), (0x33c0, 6361),
    (0x33c1, 6364), (0x33c2, 6367), (0x33c3, 6372), (0x33c4, 6375), (0x33c5, 6378), (0x33c6, 6381),
    (0x33c7, 6386), (0x33c8, 6390), (0x33c9, 6393), (0x33ca, 6396), (0x33cb, 6399), (0x33cc, 6402),
    (0x33cd, 6405), (0x33ce, 6408), (0x33cf, 6411), (0x33d0, 6414), (0x33d1, 6417), (0x33d2, 6420),
    (0x33d3, 6424), (0x33d4, 6427), (0x33d5, 6430), (0x33d6, 6434), (0x33d7, 6438), (0x33d8, 6441),
    (0x33d9, 6446), (0x33da, 6450), (0x33db, 6453), (0x33dc, 6456), (0x33dd, 6459), (0x33de, 6462),
    (0x33df, 6466), (0x33e0, 6470), (0x33e1, 6473), (0x33e2, 6476), (0x33e3, 6479), (0x33e4, 6482),
    (0x33e5, 6485), (0x33e6, 6488), (0x33e7, 6491), (0x33e8, 6494), (0x33e9, 6497), (0x33ea, 6501),
    (0x33eb, 6505), (0x33ec, 6509), (0x33ed, 6513), (0x33ee, 6517), (0x33ef, 6521), (0x33f0, 6525),
    (0x33f1, 6529), (0x33f2, 6533), (0x33f3, 6537), (0x33f4, 6541), (0x33f5, 6545), (0x33f6, 6549),
    (0x33f7, 6553), (0x33f8, 6557), (0x33f9, 6561), (0x33fa, 6565), (0x33fb, 6569), (0x33fc, 6573),
    (0x33fd, 6577), (0x33fe, 6581), (0x33ff, 6585), (0xa69c, 6589), (0xa69d, 6591), (0xa770, 6593),
    (0xa7f2, 3402), (0xa7f3, 3441), (0xa7f4, 3425), (0xa7f8, 6595), (0xa7f9, 6597), (0xab5c, 6599),
    (0xab5d, 6601), (0xab5e, 6603), (0xab5f, 6605), (0xab69, 6607), (0xfb00, 7421), (0xfb01, 7424),
    (0xfb02, 7427), (0xfb03, 7430), (0xfb04, 7434), (0xfb05, 7438), (0xfb06, 7438), (0xfb13, 7441),
    (0xfb14, 7444), (0xfb15, 7447), (0xfb16, 7450), (0xfb17, 7453), (0xfb20, 7462), (0xfb21, 3443),
    (0xfb22, 3449), (0xfb23, 7464), (0xfb24, 7466), (0xfb25, 7468), (0xfb26, 7470), (0xfb27, 7472),
    (0xfb28, 7474), (0xfb29, 3379), (0xfb4f, 7574), (0xfb50, 7577), (0xfb51, 7577), (0xfb52, 7579),
    (0xfb53, 7579), (0xfb54, 7579), (0xfb55, 7579), (0xfb56, 7581), (0xfb57, 7581), (0xfb58, 7581),
    (0xfb59, 7581), (0xfb5a, 7583), (0xfb5b, 7583), (0xfb5c, 7583), (0xfb5d, 7583), (0xfb5e, 7585),
    (0xfb5f, 7585), (0xfb60, 7585), (0xfb61, 7585), (0xfb62, 7587), (0xfb63, 7587), (0xfb64, 7587),
    (0xfb65, 7587), (0xfb66, 7589), (0xfb67, 7589), (0xfb68, 7589), (0xfb69, 7589), (0xfb6a, 7591),
    (0xfb6b, 7591), (0xfb6c, 7591), (0xfb6d, 7591), (0xfb6e, 7593), (0xfb6f, 7593), (0xfb70, 7593),
    (0xfb71, 7593), (0xfb72, 7595), (0xfb73, 7595), (0xfb74, 7595), (0xfb75, 7595), (0xfb76, 7597),
    (0xfb77, 7597), (0xfb78, 7597), (0xfb79, 7597), (0xfb7a, 7599), (0xfb7b, 7599), (0xfb7c, 7599),
    (0xfb7d, 7599), (0xfb7e, 7601), (0xfb7f, 7601), (0xfb80, 7601), (0xfb81, 7601), (0xfb82, 7603),
    (0xfb83, 7603), (0xfb84, 7605), (0xfb85, 7605), (0xfb86, 7607), (0xfb87, 7607), (0xfb88, 7609),
    (0xfb89, 7609), (0xfb8a, 7611), (0xfb8b, 7611), (0xfb8c, 7613), (0xfb8d, 7613), (0xfb8e, 7615),
    (0xfb8f, 7615), (0xfb90, 7615), (0xfb91, 7615), (0xfb92, 7617), (0xfb93, 7617), (0xfb94, 7617),
    (0xfb95, 7617), (0xfb96, 7619), (0xfb97, 7619), (0xfb98, 7619), (0xfb99, 7619), (0xfb9a, 7621),
    (0xfb9b, 7621), (0xfb9c, 7621), (0xfb9d, 7621), (0xfb9e, 7623), (0xfb9f, 7623), (0xfba0, 7625),
    (0xfba1, 7625), (0xfba2, 7625), (0xfba3, 7625), (0xfba4, 1217), (0xfba5, 1217), (0xfba6, 7627),
    (0xfba7, 7627), (0xfba8, 7627), (0xfba9, 7627), (0xfbaa, 7629), (0xfbab, 7629), (0xfbac, 7629),
    (0xfbad, 7629), (0xfbae, 7631), (0xfbaf, 7631), (0xfbb0, 1223), (0xfbb1, 1223), (0xfbd3, 7633),
    (0xfbd4, 7633), (0xfbd5, 7633), (0xfbd6, 7633), (0xfbd7, 7635), (0xfbd8, 7635), (0xfbd9, 7637),
    (0xfbda, 7637), (0xfbdb, 7639), (0xfbdc, 7639), (0xfbdd, 1211), (0xfbde, 7641), (0xfbdf, 7641),
    (0xfbe0, 7643), (0xfbe1, 7643), (0xfbe2, 7645), (0xfbe3, 7645), (0xfbe4, 7647), (0xfbe5, 7647),
    (0xfbe6, 7647), (0xfbe7, 7647), (0xfbe8, 7649), (0xfbe9, 7649), (0xfbea, 7651), (0xfbeb, 7651),
    (0xfbec, 7655), (0xfbed, 7655), (0xfbee, 7659), (0xfbef, 7659), (0xfbf0, 7663), (0xfbf1, 7663),
    (0xfbf2, 7667), (0xfbf3, 7667), (0xfbf4, 7671), (0xfbf5, 7671), (0xfbf6, 7675), (0xfbf7, 7675),
    (0xfbf8, 7675), (0xfbf9, 7679), (0xfbfa, 7679), (0xfbfb, 7679), (0xfbfc, 7683), (0xfbfd, 7683),
    (0xfbfe, 7683), (0xfbff, 7683), (0xfc00, 7685), (0xfc01, 7689), (0xfc02, 7693), (0xfc03, 7679),
    (0xfc04, 7697), (0xfc05, 7701), (0xfc06, 7704), (0xfc07, 7707), (0xfc08, 7710), (0xfc09, 7713),
    (0xfc0a, 7716), (0xfc0b, 7719), (0xfc0c, 7722), (0xfc0d, 7725), (0xfc0e, 7728), (0xfc0f, 7731),
    (0xfc10, 7734), (0xfc11, 7737), (0xfc12, 7740), (0xfc13, 7743), (0xfc14, 7746), (0xfc15, 7749),
    (0xfc16, 7752), (0xfc17, 7755), (0xfc18, 7758), (0xfc19, 7761), (0xfc1a, 7764), (0xfc1b, 7767),
    (0xfc1c, 7770), (0xfc1d, 7773), (0xfc1e, 7776), (0xfc1f, 7779), (0xfc20, 7782), (0xfc21, 7785),
    (0xfc22, 7788), (0xfc23, 7791), (0xfc24, 7794), (0xfc25, 7797), (0xfc26, 7800), (0xfc27, 7803),
    (0xfc28, 7806), (0xfc29, 7809), (0xfc2a, 7812), (0xfc2b, 7815), (0xfc2c, 7818), (0xfc2d, 7821),
    (0xfc2e, 7824), (0xfc2f, 7827), (0xfc30, 7830), (0xfc31, 7833), (0xfc32, 7836), (0xfc33, 7839),
    (0xfc34, 7842), (0xfc35, 7845), (0xfc36, 7848), (0xfc37, 7851), (0xfc38, 7854), (0xfc39, 7857),
    (0xfc3a, 7860), (0xfc3b, 7863), (0xfc3c, 7866), (0xfc3d, 7869), (0xfc3e, 7872), (0xfc3f, 7875),
    (0xfc40, 7878), (0xfc41, 7881), (0xfc42, 7884), (0xfc43, 7887), (0xfc44, 7890), (0xfc45, 7893),
    (0xfc46, 7896), (0xfc47, 7899), (0xfc48, 7902), (0xfc49, 7905), (0xfc4a, 7908), (0xfc4b, 7911),
    (0xfc4c, 7914), (0xfc4d, 7917), (0xfc4e, 7920), (0xfc4f, 7923), (0xfc50, 7926), (0xfc51, 7929),
    (0xfc52, 7932), (0xfc53, 7935), (0xfc54, 7938), (0xfc55, 7941), (0xfc56, 7944), (0xfc57, 7947),
    (0xfc58, 7950), (0xfc59, 7953), (0xfc5a, 7956), (0xfc5b, 7959), (0xfc5c, 7962), (0xfc5d, 7965),
    (0xfc5e, 7968), (0xfc5f, 7972), (0xfc60, 7976), (0xfc61, 7980), (0xfc62, 7984), (0xfc63, 7988),
    (0xfc64, 7992), (0xfc65, 7996), (0xfc66, 7693), (0xfc67, 8000), (0xfc68, 7679), (0xfc69, 7697),
    (0xfc6a, 8004), (0xfc6b, 8007), (0xfc6c, 7710), (0xfc6d, 8010), (0xfc6e, 7713), (0xfc6f, 7716),
    (0xfc70, 8013), (0xfc71, 8016), (0xfc72, 7728), (0xfc73, 8019), (0xfc74, 7731), (0xfc75, 7734),
    (0xfc76, 8022), (0xfc77, 8025), (0xfc78, 7740), (0xfc79, 8028), (0xfc7a, 7743), (0xfc7b, 7746),
    (0xfc7c, 7833), (0xfc7d, 7836), (0xfc7e, 7845), (0xfc7f, 7848), (0xfc80, 7851), (0xfc81, 7863),
    (0xfc82, 7866), (0xfc83, 7869), (0xfc84, 7872), (0xfc85, 7884), (0xfc86, 7887), (0xfc87, 7890),
    (0xfc88, 8031), (0xfc89, 7902), (0xfc8a, 8034), (0xfc8b, 8037), (0xfc8c, 7920), (0xfc8d, 8040),
    (0xfc8e, 7923), (0xfc8f, 7926), (0xfc90, 7965), (0xfc91, 8043), (0xfc92, 8046), (0xfc93, 7950),
    (0xfc94, 8049), (0xfc95, 7953), (0xfc96, 7956), (0xfc97, 7685), (0xfc98, 7689), (0xfc99, 8052),
    (0xfc9a, 7693), (0xfc9b, 8056), (0xfc9c, 7701), (0xfc9d, 7704), (0xfc9e, 7707), (0xfc9f, 7710),
    (0xfca0, 8060), (0xfca1, 7719), (0xfca2, 7722), (0xfca3, 7725), (0xfca4, 7728), (0xfca5, 8063),
    (0xfca6, 7740), (0xfca7, 7749), (0xfca8, 7752), (0xfca9, 7755), (0xfcaa, 7758), (0xfcab, 7761),
    (0xfcac, 7767), (0xfcad, 7770), (0xfcae, 7773), (0xfcaf, 7776), (0xfcb0, 7779), (0xfcb1, 7782),
    (0xfcb2, 8066), (0xfcb3, 7785), (0xfcb4, 7788), (0xfcb5, 7791), (0xfcb6, 7794), (0xfcb7, 7797),
    (0xfcb8, 7800), (0xfcb9, 7806), (0xfcba, 7809), (0xfcbb, 7812), (0xfcbc, 7815), (0xfcbd, 7818),
    (0xfcbe, 7821), (0xfcbf, 7824), (0xfcc0, 7827), (0xfcc1, 7830), (0xfcc2, 7839), (0xfcc3, 7842),
    (0xfcc4, 7854), (0xfcc5, 7857), (0xfcc6, 7860), (0xfcc7, 7863), (0xfcc8, 7866), (0xfcc9, 7875),
    (0xfcca, 7878), (0xfccb, 7881), (0xfccc, 7884), (0xfccd, 8069), (0xfcce, 7893), (0xfccf, 7896),
    (0xfcd0, 7899), (0xfcd1, 7902), (0xfcd2, 7911), (0xfcd3, 7914), (0xfcd4, 7917), (0xfcd5, 7920),
    (0xfcd6, 8072), (0xfcd7, 7929), (0xfcd8, 7932), (0xfcd9, 8075), (0xfcda, 7941), (0xfcdb, 7944),
    (0xfcdc, 7947), (0xfcdd, 7950), (0xfcde, 8078), (0xfcdf, 7693), (0xfce0, 8056), (0xfce1, 7710),
    (0xfce2, 8060), (0xfce3, 7728), (0xfce4, 8063), (0xfce5, 7740), (0xfce6, 8081), (0xfce7, 7779),
    (0xfce8, 8084), (0xfce9, 8087), (0xfcea, 8090), (0xfceb, 7863), (0xfcec, 7866), (0xfced, 7884),
    (0xfcee, 7920), (0xfcef, 8072), (0xfcf0, 7950), (0xfcf1, 8078), (0xfcf2, 8093), (0xfcf3, 8097),
    (0xfcf4, 8101), (0xfcf5, 8105), (0xfcf6, 8108), (0xfcf7, 8111), (0xfcf8, 8114), (0xfcf9, 8117),
    (0xfcfa, 8120), (0xfcfb, 8123), (0xfcfc, 8126), (0xfcfd, 8129), (0xfcfe, 8132), (0xfcff, 8135),
    (0xfd00, 8138), (0xfd01, 8141), (0xfd02, 8144), (0xfd03, 8147), (0xfd04, 8150), (0xfd05, 8153),
    (0xfd06, 8156), (0xfd07, 8159), (0xfd08, 8162), (0xfd09, 8165), (0xfd0a, 8168), (0xfd0b, 8171),
    (0xfd0c, 8087), (0xfd0d, 8174), (0xfd0e, 8177), (0xfd0f, 8180), (0xfd10, 8183), (0xfd11, 8105),
    (0xfd12, 8108), (0xfd13, 8111), (0xfd14, 8114), (0xfd15, 8117), (0xfd16, 8120), (0xfd17, 8123),
    (0xfd18, 8126), (0xfd19, 8129), (0xfd1a, 8132), (0xfd1b, 8135), (0xfd1c, 8138), (0xfd1d, 8141),
    (0xfd1e, 8144), (0xfd1f, 8147), (0xfd20, 8150), (0xfd21, 8153), (0xfd22, 8156), (0xfd23, 8159),
    (0xfd24, 8162), (0xfd25, 8165), (0xfd26, 8168), (0xfd27, 8171), (0xfd28, 8087), (0xfd29, 8174),
    (0xfd2a, 8177), (0xfd2b, 8180), (0xfd2c, 8183), (0xfd2d, 8165), (0xfd2e, 8168), (0xfd2f, 8171),
    (0xfd30, 8087), (0xfd31, 8084), (0xfd32, 8090), (0xfd33, 7803), (0xfd34, 7770), (0xfd35, 7773),
    (0xfd36, 7776), (0xfd37, 8165), (0xfd38, 8168), (0xfd39, 8171), (0xfd3a, 7803), (0xfd3b, 7806),
    (0xfd3c, 8186), (0xfd3d, 8186), (0xfd50, 8189), (0xfd51, 8193), (0xfd52, 8193), (0xfd53, 8197),
    (0xfd54, 8201), (0xfd55, 8205), (0xfd56, 8209), (0xfd57, 8213), (0xfd58, 8217), (0xfd59, 8217),
    (0xfd5a, 8221), (0xfd5b, 8225), (0xfd5c, 8229), (0xfd5d, 8233), (0xfd5e, 8237), (0xfd5f, 8241),
    (0xfd60, 8241), (0xfd61, 8245), (0xfd62, 8249), (0xfd63, 8249), (0xfd64, 8253), (0xfd65, 8253),
    (0xfd66, 8257), (0xfd67, 8261), (0xfd68, 8261), (0xfd69, 8265), (0xfd6a, 8269), (0xfd6b, 8269),
    (0xfd6c, 8273), (0xfd6d, 8273), (0xfd6e, 8277), (0xfd6f, 8281), (0xfd70, 8281), (0xfd71, 8285),
    (0xfd72, 8285), (0xfd73, 8289), (0xfd74, 8293), (0xfd75, 8297), (0xfd76, 8301), (0xfd77, 8301),
    (0xfd78, 8305), (0xfd79, 8309), (0xfd7a, 8313), (0xfd7b, 8317), (0xfd7c, 8321), (0xfd7d, 8321),
    (0xfd7e, 8325), (0xfd7f, 8329), (0xfd80, 8333), (0xfd81, 8337), (0xfd82, 8341), (0xfd83, 8345),
    (0xfd84, 8345), (0xfd85, 8349), (0xfd86, 8349), (0xfd87, 8353), (0xfd88, 8353), (0xfd89, 8357),
    (0xfd8a, 8361), (0xfd8b, 8365), (0xfd8c, 8369), (0xfd8d, 8373), (0xfd8e, 8377), (0xfd8f, 8381),
    (0xfd92, 8385), (0xfd93, 8389), (0xfd94, 8393), (0xfd95, 8397), (0xfd96, 8401), (0xfd97, 8405),
    (0xfd98, 8405), (0xfd99, 8409), (0xfd9a, 8413), (0xfd9b, 8417), (0xfd9c, 8421), (0xfd9d, 8421),
    (0xfd9e, 8425), (0xfd9f, 8429), (0xfda0, 8433), (0xfda1, 8437), (0xfda2, 8441), (0xfda3, 8445),
    (0xfda4, 8449), (0xfda5, 8453), (0xfda6, 8457), (0xfda7, 8461), (0xfda8, 8465), (0xfda9, 8469),
    (0xfdaa, 8473), (0xfdab, 8477), (0xfdac, 8481), (0xfdad, 8485), (0xfdae, 8489), (0xfdaf, 8493),
    (0xfdb0, 8497), (0xfdb1, 8501), (0xfdb2, 8505), (0xfdb3, 8509), (0xfdb4, 8325), (0xfdb5, 8333),
    (0xfdb6, 8513), (0xfdb7, 8517), (0xfdb8, 8521), (0xfdb9, 8525), (0xfdba, 8529), (0xfdbb, 8533),
    (0xfdbc, 8529), (0xfdbd, 8521), (0xfdbe, 8537), (0xfdbf, 8541), (0xfdc0, 8545), (0xfdc1, 8549),
    (0xfdc2, 8553), (0xfdc3, 8533), (0xfdc4, 8297), (0xfdc5, 8257), (0xfdc6, 8557), (0xfdc7, 8561),
    (0xfdf0, 8565), (0xfdf1, 8569), (0xfdf2, 8573), (0xfdf3, 8578), (0xfdf4, 8583), (0xfdf5, 8588),
    (0xfdf6, 8593), (0xfdf7, 8598), (0xfdf8, 8603), (0xfdf9, 8608), (0xfdfa, 8612), (0xfdfb, 8631),
    (0xfdfc, 8640), (0xfe10, 8645), (0xfe11, 8647), (0xfe12, 8649), (0xfe13, 8651), (0xfe14, 930),
    (0xfe15, 8653), (0xfe16, 8655), (0xfe17, 8657), (0xfe18, 8659), (0xfe19, 3327), (0xfe30, 3324),
    (0xfe31, 8661), (0xfe32, 8663), (0xfe33, 8665), (0xfe34, 8665), (0xfe35, 3385), (0xfe36, 3387),
    (0xfe37, 8667), (0xfe38, 8669), (0xfe39, 8671), (0xfe3a, 8673), (0xfe3b, 8675), (0xfe3c, 8677),
    (0xfe3d, 8679), (0xfe3e, 8681), (0xfe3f, 3743), (0xfe40, 3745), (0xfe41, 8683), (0xfe42, 8685),
    (0xfe43, 8687), (0xfe44, 8689), (0xfe47, 8691), (0xfe48, 8693), (0xfe49, 3348), (0xfe4a, 3348),
    (0xfe4b, 3348), (0xfe4c, 3348), (0xfe4d, 8665), (0xfe4e, 8665), (0xfe4f, 8665), (0xfe50, 8645),
    (0xfe51, 8647), (0xfe52, 3322), (0xfe54, 930), (0xfe55, 8651), (0xfe56, 8655), (0xfe57, 8653),
    (0xfe58, 8661), (0xfe59, 3385), (0xfe5a, 3387), (0xfe5b, 8667), (0xfe5c, 8669), (0xfe5d, 8671),
    (0xfe5e, 8673), (0xfe5f, 8695), (0xfe60, 8697), (0xfe61, 8699), (0xfe62, 3379), (0xfe63, 8701),
    (0xfe64, 8703), (0xfe65, 8705), (0xfe66, 3383), (0xfe68, 8707), (0xfe69, 8709), (0xfe6a, 8711),
    (0xfe6b, 8713), (0xfe70, 8715), (0xfe71, 8718), (0xfe72, 8721), (0xfe74, 8724), (0xfe76, 8727),
    (0xfe77, 8730), (0xfe78, 8733), (0xfe79, 8736), (0xfe7a, 8739), (0xfe7b, 8742), (0xfe7c, 8745),
    (0xfe7d, 8748), (0xfe7e, 8751), (0xfe7f, 8754), (0xfe80, 8757), (0xfe81, 1190), (0xfe82, 1190),
    (0xfe83, 1193), (0xfe84, 1193), (0xfe85, 1196), (0xfe86, 1196), (0xfe87, 1199), (0xfe88, 1199),
    (0xfe89, 1202), (0xfe8a, 1202), (0xfe8b, 1202), (0xfe8c, 1202), (0xfe8d, 8759), (0xfe8e, 8759),
    (0xfe8f, 8761), (0xfe90, 8761), (0xfe91, 8761), (0xfe92, 8761), (0xfe93, 8763), (0xfe94, 8763),
    (0xfe95, 8765), (0xfe96, 8765), (0xfe97, 8765), (0xfe98, 8765), (0xfe99, 8767), (0xfe9a, 8767),
    (0xfe9b, 8767), (0xfe9c, 8767), (0xfe9d, 8769), (0xfe9e, 8769), (0xfe9f, 8769), (0xfea0, 8769),
    (0xfea1, 8771), (0xfea2, 8771), (0xfea3, 8771), (0xfea4, 8771), (0xfea5, 8773), (0xfea6, 8773),
    (0xfea7, 8773), (0xfea8, 8773), (0xfea9, 8775), (0xfeaa, 8775), (0xfeab, 8777), (0xfeac, 8777),
    (0xfead, 8779), (0xfeae, 8779), (0xfeaf, 8781), (0xfeb0, 8781), (0xfeb1, 8783), (0xfeb2, 8783),
    (0xfeb3, 8783), (0xfeb4, 8783), (0xfeb5, 8785), (0xfeb6, 8785), (0xfeb7, 8785), (0xfeb8, 8785),
    (0xfeb9, 8787), (0xfeba, 8787), (0xfebb, 8787), (0xfebc, 8787), (0xfebd, 8789), (0xfebe, 8789),
    (0xfebf, 8789), (0xfec0, 8789), (0xfec1, 8791), (0xfec2, 8791), (0xfec3, 8791), (0xfec4, 8791),
    (0xfec5, 8793), (0xfec6, 8793), (0xfec7, 8793), (0xfec8, 8793), (0xfec9, 8795), (0xfeca, 8795),
    (0xfecb, 8795), (0xfecc, 8795), (0xfecd, 8797), (0xfece, 8797), (0xfecf, 8797), (0xfed0, 8797),
    (0xfed1, 8799), (0xfed2, 8799), (0xfed3, 8799), (0xfed4, 8799), (0xfed5, 8801), (0xfed6, 8801),
    (0xfed7, 8801), (0xfed8, 8801), (0xfed9, 8803), (0xfeda, 8803), (0xfedb, 8803), (0xfedc, 8803),
    (0xfedd, 8805), (0xfede, 8805), (0xfedf, 8805), (0xfee0, 8805), (0xfee1, 8807), (0xfee2, 8807),
    (0xfee3, 8807), (0xfee4, 8807), (0xfee5, 8809), (0xfee6, 8809), (0xfee7, 8809), (0xfee8, 8809),
    (0xfee9, 8811), (0xfeea, 8811), (0xfeeb, 8811), (0xfeec, 8811), (0xfeed, 8813), (0xfeee, 8813),
    (0xfeef, 7649), (0xfef0, 7649), (0xfef1, 8815), (0xfef2, 8815), (0xfef3, 8815), (0xfef4, 8815),
    (0xfef5, 8817), (0xfef6, 8817), (0xfef7, 8821), (0xfef8, 8821), (0xfef9, 8825), (0xfefa, 8825),
    (0xfefb, 8829), (0xfefc, 8829), (0xff01, 8653), (0xff02, 8832), (0xff03, 8695), (0xff04, 8709),
    (0xff05, 8711), (0xff06, 8697), (0xff07, 8834), (0xff08, 3385), (0xff09, 3387), (0xff0a, 8699),
    (0xff0b, 3379), (0xff0c, 8645), (0xff0d, 8701), (0xff0e, 3322), (0xff0f, 8836), (0xff10, 3365),
    (0xff11, 22), (0xff12, 10), (0xff13, 12), (0xff14, 3367), (0xff15, 3369), (0xff16, 3371),
    (0xff17, 3373), (0xff18, 3375), (0xff19, 3377), (0xff1a, 8651), (0xff1b, 930), (0xff1c, 8703),
    (0xff1d, 3383), (0xff1e, 8705), (0xff1f, 8655), (0xff20, 8713), (0xff21, 1471), (0xff22, 1475),
    (0xff23, 3402), (0xff24, 1477), (0xff25, 1479), (0xff26, 3441), (0xff27, 1483), (0xff28, 1485),
    (0xff29, 1487), (0xff2a, 1489), (0xff2b, 1491), (0xff2c, 1493), (0xff2d, 1495), (0xff2e, 1497),
    (0xff2f, 1499), (0xff30, 1503), (0xff31, 3425), (0xff32, 1505), (0xff33, 4046), (0xff34, 1507),
    (0xff35, 1509), (0xff36, 3535), (0xff37, 1511), (0xff38, 3552), (0xff39, 4048), (0xff3a, 3437),
    (0xff3b, 8691), (0xff3c, 8707), (0xff3d, 8693), (0xff3e, 8838), (0xff3f, 8665), (0xff40, 3279),
    (0xff41, 5), (0xff42, 1519), (0xff43, 1571), (0xff44, 1521), (0xff45, 1523), (0xff46, 1577),
    (0xff47, 1531), (0xff48, 872), (0xff49, 1565), (0xff4a, 876), (0xff4b, 1533), (0xff4c, 910),
    (0xff4d, 1535), (0xff4e, 3389), (0xff4f, 24), (0xff50, 1545), (0xff51, 4050), (0xff52, 878),
    (0xff53, 536), (0xff54, 1547), (0xff55, 1549), (0xff56, 1555), (0xff57, 886), (0xff58, 912),
    (0xff59, 888), (0xff5a, 1631), (0xff5b, 8667), (0xff5c, 8840), (0xff5d, 8669), (0xff5e, 8842),
    (0xff5f, 8844), (0xff60, 8846), (0xff61, 8649), (0xff62, 8683), (0xff63, 8685), (0xff64, 8647),
    (0xff65, 8848), (0xff66, 5560), (0xff67, 8850), (0xff68, 8852), (0xff69, 8854), (0xff6a, 8856),
    (0xff6b, 8858), (0xff6c, 8860), (0xff6d, 8862), (0xff6e, 8864), (0xff6f, 8866), (0xff70, 8868),
    (0xff71, 5468), (0xff72, 5470), (0xff73, 5472), (0xff74, 5474), (0xff75, 5476), (0xff76, 5478),
    (0xff77, 5480), (0xff78, 5482), (0xff79, 5484), (0xff7a, 5486), (0xff7b, 5488), (0xff7c, 5490),
    (0xff7d, 5492), (0xff7e, 5494), (0xff7f, 5496), (0xff80, 5498), (0xff81, 5500), (0xff82, 5502),
    (0xff83, 5504), (0xff84, 5506), (0xff85, 5508), (0xff86, 5510), (0xff87, 5512), (0xff88, 5514),
    (0xff89, 5516), (0xff8a, 5518), (0xff8b, 5520), (0xff8c, 5522), (0xff8d, 5524), (0xff8e, 5526),
    (0xff8f, 5528), (0xff90, 5530), (0xff91, 5532), (0xff92, 5534), (0xff93, 5536), (0xff94, 5538),
    (0xff95, 5540), (0xff96, 5542), (0xff97, 5544), (0xff98, 5546), (0xff99, 5548), (0xff9a, 5550),
    (0xff9b, 5552), (0xff9c, 5554), (0xff9d, 8870), (0xff9e, 8872), (0xff9f, 8874), (0xffa0, 4799),
    (0xffa1, 4697), (0xffa2, 4699), (0xffa3, 4701), (0xffa4, 4703), (0xffa5, 4705), (0xffa6, 4707),
    (0xffa7, 4709), (0xffa8, 4711), (0xffa9, 4713), (0xffaa, 4715), (0xffab, 4717), (0xffac, 4719),
    (0xffad, 4721), (0xffae, 4723), (0xffaf, 4725), (0xffb0, 4727), (0xffb1, 4729), (0xffb2, 4731),
    (0xffb3, 4733), (0xffb4, 4735), (0xffb5, 4737), (0xffb6, 4739), (0xffb7, 4741), (0xffb8, 4743),
    (0xffb9, 4745), (0xffba, 4747), (0xffbb, 4749), (0xffbc, 4751), (0xffbd, 4753), (0xffbe, 4755),
    (0xffc2, 4757), (0xffc3, 4759), (0xffc4, 4761), (0xffc5, 4763), (0xffc6, 4765), (0xffc7, 4767),
    (0xffca, 4769), (0xffcb, 4771), (0xffcc, 4773), (0xffcd, 4775), (0xffce, 4777), (0xffcf, 4779),
    (0xffd2, 4781), (0xffd3, 4783), (0xffd4, 4785), (0xffd5, 4787), (0xffd6, 4789), (0xffd7, 4791),
    (0xffda, 4793), (0xffdb, 4795), (0xffdc, 4797), (0xffe0, 8876), (0xffe1, 8878), (0xffe2, 8880),
    (0xffe3, 7), (0xffe4, 8882), (0xffe5, 8884), (0xffe6, 8886), (0xffe8, 8888), (0xffe9, 8890),
    (0xffea, 8892), (0xffeb, 8894), (0xffec, 8896), (0xffed, 8898), (0xffee, 8900), (0x10781, 8902),
    (0x10782, 8904), (0x10783, 8906), (0x10784, 8908), (0x10785, 8910), (0x10787, 8912), (0x10788, 8914),
    (0x10789, 8916), (0x1078a, 8918), (0x1078b, 8920), (0x1078c, 8922), (0x1078d, 8924), (0x1078e, 8926),
    (0x1078f, 8928), (0x10790, 8930), (0x10791, 8932), (0x10792, 8934), (0x10793, 8936), (0x10794, 8938),
    (0x10795, 3420), (0x10796, 8940), (0x10797, 8942), (0x10798, 8944), (0x10799, 8946), (0x1079a, 8948),
    (0x1079b, 8950), (0x1079c, 8952), (0x1079d, 8954), (0x1079e, 8956), (0x1079f, 8958), (0x107a0, 8960),
    (0x107a1, 8962), (0x107a2, 8964), (0x107a3, 8966), (0x107a4, 8968), (0x107a5, 4050), (0x107a6, 8970),
    (0x107a7, 8972), (0x107a8, 8974), (0x107a9, 8976), (0x107aa, 8978), (0x107ab, 8980), (0x107ac, 8982),
    (0x107ad, 8984), (0x107ae, 8986), (0x107af, 8988), (0x107b0, 8990), (0x107b2, 8992), (0x107b3, 8994),
    (0x107b4, 8996), (0x107b5, 8998), (0x107b6, 9000), (0x107b7, 9002), (0x107b8, 9004), (0x107b9, 9006),
    (0x107ba, 9008), (0x1d400, 1471), (0x1d401, 1475), (0x1d402, 3402), (0x1d403, 1477), (0x1d404, 1479),
    (0x1d405, 3441), (0x1d406, 1483), (0x1d407, 1485), (0x1d408, 1487), (0x1d409, 1489), (0x1d40a, 1491),
    (0x1d40b, 1493), (0x1d40c, 1495), (0x1d40d, 1497), (0x1d40e, 1499), (0x1d40f, 1503), (0x1d410, 3425),
    (0x1d411, 1505), (0x1d412, 4046), (0x1d413, 1507), (0x1d414, 1509), (0x1d415, 3535), (0x1d416, 1511),
    (0x1d417, 3552), (0x1d418, 4048), (0x1d419, 3437), (0x1d41a, 5), (0x1d41b, 1519), (0x1d41c, 1571),
    (0x1d41d, 1521), (0x1d41e, 1523), (0x1d41f, 1577), (0x1d420, 1531), (0x1d421, 872), (0x1d422, 1565),
    (0x1d423, 876), (0x1d424, 1533), (0x1d425, 910), (0x1d426, 1535), (0x1d427, 3389), (0x1d428, 24),
    (0x1d429, 1545), (0x1d42a, 4050), (0x1d42b, 878), (0x1d42c, 536), (0x1d42d, 1547), (0x1d42e, 1549),
    (0x1d42f, 1555), (0x1d430, 886), (0x1d431, 912), (0x1d432, 888), (0x1d433, 1631), (0x1d434, 1471),
    (0x1d435, 1475), (0x1d436, 3402), (0x1d437, 1477), (0x1d438, 1479), (0x1d439, 3441), (0x1d43a, 1483),
    (0x1d43b, 1485), (0x1d43c, 1487), (0x1d43d, 1489), (0x1d43e, 1491), (0x1d43f, 1493), (0x1d440, 1495),
    (0x1d441, 1497), (0x1d442, 1499), (0x1d443, 1503), (0x1d444, 3425), (0x1d445, 1505), (0x1d446, 4046),
    (0x1d447, 1507), (0x1d448, 1509), (0x1d449, 3535), (0x1d44a, 1511), (0x1d44b, 3552), (0x1d44c, 4048),
    (0x1d44d, 3437), (0x1d44e, 5), (0x1d44f, 1519), (0x1d450, 1571), (0x1d451, 1521), (0x1d452, 1523),
    (0x1d453, 1577), (0x1d454, 1531), (0x1d456, 1565), (0x1d457, 876), (0x1d458, 1533), (0x1d459, 910),
    (0x1d45a, 1535), (0x1d45b, 3389), (0x1d45c, 24), (0x1d45d, 1545), (0x1d45e, 4050), (0x1d45f, 878),
    (0x1d460, 536), (0x1d461, 1547), (0x1d462, 1549), (0x1d463, 1555), (0x1d464, 886), (0x1d465, 912),
    (0x1d466, 888), (0x1d467, 1631), (0x1d468, 1471), (0x1d469, 1475), (0x1d46a, 3402), (0x1d46b, 1477),
    (0x1d46c, 1479), (0x1d46d, 3441), (0x1d46e, 1483), (0x1d46f, 1485), (0x1d470, 1487), (0x1d471, 1489),
    (0x1d472, 1491), (0x1d473, 1493), (0x1d474, 1495), (0x1d475, 1497), (0x1d476, 1499), (0x1d477, 1503),
    (0x1d478, 3425), (0x1d479, 1505), (0x1d47a, 4046), (0x1d47b, 1507), (0x1d47c, 1509), (0x1d47d, 3535),
    (0x1d47e, 1511), (0x1d47f, 3552), (0x1d480, 4048), (0x1d481, 3437), (0x1d482, 5), (0x1d483, 1519),
    (0x1d484, 1571), (0x1d485, 1521), (0x1d486, 1523), (0x1d487, 1577), (0x1d488, 1531), (0x1d489, 872),
    (0x1d48a, 1565), (0x1d48b, 876), (0x1d48c, 1533), (0x1d48d, 910), (0x1d48e, 1535), (0x1d48f, 3389),
    (0x1d490, 24), (0x1d491, 1545), (0x1d492, 4050), (0x1d493, 878), (0x1d494, 536), (0x1d495, 1547),
    (0x1d496, 1549), (0x1d497, 1555), (0x1d498, 886), (0x1d499, 912), (0x1d49a, 888), (0x1d49b, 1631),
    (0x1d49c, 1471), (0x1d49e, 3402), (0x1d49f, 1477), (0x1d4a2, 1483), (0x1d4a5, 1489), (0x1d4a6, 1491),
    (0x1d4a9, 1497), (0x1d4aa, 1499), (0x1d4ab, 1503), (0x1d4ac, 3425), (0x1d4ae, 4046), (0x1d4af, 1507),
    (0x1d4b0, 1509), (0x1d4b1, 3535), (0x1d4b2, 1511), (0x1d4b3, 3552), (0x1d4b4, 4048), (0x1d4b5, 3437),
    (0x1d4b6, 5), (0x1d4b7, 1519), (0x1d4b8, 1571), (0x1d4b9, 1521), (0x1d4bb, 1577), (0x1d4bd, 872),
    (0x1d4be, 1565), (0x1d4bf, 876), (0x1d4c0, 1533), (0x1d4c1, 910), (0x1d4c2, 1535), (0x1d4c3, 3389),
    (0x1d4c5, 1545), (0x1d4c6, 4050), (0x1d4c7, 878), (0x1d4c8, 536), (0x1d4c9, 1547), (0x1d4ca, 1549),
    (0x1d4cb, 1555), (0x1d4cc, 886), (0x1d4cd, 912), (0x1d4ce, 888), (0x1d4cf, 1631), (0x1d4d0, 1471),
    (0x1d4d1, 1475), (0x1d4d2, 3402), (0x1d4d3, 1477), (0x1d4d4, 1479), (0x1d4d5, 3441), (0x1d4d6, 1483),
    (0x1d4d7, 1485), (0x1d4d8, 1487), (0x1d4d9, 1489), (0x1d4da, 1491), (0x1d4db, 1493), (0x1d4dc, 1495),
    (0x1d4dd, 1497), (0x1d4de, 1499), (0x1d4df, 1503), (0x1d4e0, 3425), (0x1d4e1, 1505), (0x1d4e2, 4046),
    (0x1d4e3, 1507), (0x1d4e4, 1509), (0x1d4e5, 3535), (0x1d4e6, 1511), (0x1d4e7, 3552), (0x1d4e8, 4048),
    (0x1d4e9, 3437), (0x1d4ea, 5), (0x1d4eb, 1519), (0x1d4ec, 1571), (0x1d4ed, 1521), (0x1d4ee, 1523),
    (0x1d4ef, 1577), (0x1d4f0, 1531), (0x1d4f1, 872), (0x1d4f2, 1565), (0x1d4f3, 876), (0x1d4f4, 1533),
    (0x1d4f5, 910), (0x1d4f6, 1535), (0x1d4f7, 3389), (0x1d4f8, 24), (0x1d4f9, 1545), (0x1d4fa, 4050),
    (0x1d4fb, 878), (0x1d4fc, 536), (0x1d4fd, 1547), (0x1d4fe, 1549), (0x1d4ff, 1555), (0x1d500, 886),
    (0x1d501, 912), (0x1d502, 888), (0x1d503, 1631), (0x1d504, 1471), (0x1d505, 1475), (0x1d507, 1477),
    (0x1d508, 1479), (0x1d509, 3441), (0x1d50a, 1483), (0x1d50d, 1489), (0x1d50e, 1491), (0x1d50f, 1493),
    (0x1d510, 1495), (0x1d511, 1497), (0x1d512, 1499), (0x1d513, 1503), (0x1d514, 3425), (0x1d516, 4046),
    (0x1d517, 1507), (0x1d518, 1509), (0x1d519, 3535), (0x1d51a, 1511), (0x1d51b, 3552), (0x1d51c, 4048),
    (0x1d51e, 5), (0x1d51f, 1519), (0x1d520, 1571), (0x1d521, 1521), (0x1d522, 1523), (0x1d523, 1577),
    (0x1d524, 1531), (0x1d525, 872), (0x1d526, 1565), (0x1d527, 876), (0x1d528, 1533), (0x1d529, 910),
    (0x1d52a, 1535), (0x1d52b, 3389), (0x1d52c, 24), (0x1d52d, 1545), (0x1d52e, 4050), (0x1d52f, 878),
    (0x1d530, 536), (0x1d531, 1547), (0x1d532, 1549), (0x1d533, 1555), (0x1d534, 886), (0x1d535, 912),
    (0x1d536, 888), (0x1d537, 1631), (0x1d538, 1471), (0x1d539, 1475), (0x1d53b, 1477), (0x1d53c, 1479),
    (0x1d53d, 3441), (0x1d53e, 1483), (0x1d540, 1487), (0x1d541, 1489), (0x1d542, 1491), (0x1d543, 1493),
    (0x1d544, 1495), (0x1d546, 1499), (0x1d54a, 4046), (0x1d54b, 1507), (0x1d54c, 1509), (0x1d54d, 3535),
    (0x1d54e, 1511), (0x1d54f, 3552), (0x1d550, 4048), (0x1d552, 5), (0x1d553, 1519), (0x1d554, 1571),
    (0x1d555, 1521), (0x1d556, 1523), (0x1d557, 1577), (0x1d558, 1531), (0x1d559, 872), (0x1d55a, 1565),
    (0x1d55b, 876), (0x1d55c, 1533), (0x1d55d, 910), (0x1d55e, 1535), (0x1d55f, 3389), (0x1d560, 24),
    (0x1d561, 1545), (0x1d562, 4050), (0x1d563, 878), (0x1d564, 536), (0x1d565, 1547), (0x1d566, 1549),
    (0x1d567, 1555), (0x1d568, 886), (0x1d569, 912), (0x1d56a, 888), (0x1d56b, 1631), (0x1d56c, 1471),
    (0x1d56d, 1475), (0x1d56e, 3402), (0x1d56f, 1477), (0x1d570, 1479), (0x1d571, 3441), (0x1d572, 1483),
    (0x1d573, 1485), (0x1d574, 1487), (0x1d575, 1489), (0x1d576, 1491), (0x1d577, 1493), (0x1d578, 1495),
    (0x1d579, 1497), (0x1d57a, 1499), (0x1d57b, 1503), (0x1d57c, 3425), (0x1d57d, 1505), (0x1d57e, 4046),
    (0x1d57f, 1507), (0x1d580, 1509), (0x1d581, 3535), (0x1d582, 1511), (0x1d583, 3552), (0x1d584, 4048),
    (0x1d585, 3437), (0x1d586, 5), (0x1d587, 1519), (0x1d588, 1571), (0x1d589, 1521), (0x1d58a, 1523),
    (0x1d58b, 1577), (0x1d58c, 1531), (0x1d58d, 872), (0x1d58e, 1565), (0x1d58f, 876), (0x1d590, 1533),
    (0x1d591, 910), (0x1d592, 1535), (0x1d593, 3389), (0x1d594, 24), (0x1d595, 1545), (0x1d596, 4050),
    (0x1d597, 878), (0x1d598, 536), (0x1d599, 1547), (0x1d59a, 1549), (0x1d59b, 1555), (0x1d59c, 886),
    (0x1d59d, 912), (0x1d59e, 888), (0x1d59f, 1631), (0x1d5a0, 1471), (0x1d5a1, 1475), (0x1d5a2, 3402),
    (0x1d5a3, 1477), (0x1d5a4, 1479), (0x1d5a5, 3441), (0x1d5a6, 1483), (0x1d5a7, 1485), (0x1d5a8, 1487),
    (0x1d5a9, 1489), (0x1d5aa, 1491), (0x1d5ab, 1493), (0x1d5ac, 1495), (0x1d5ad, 1497), (0x1d5ae, 1499),
    (0x1d5af, 1503), (0x1d5b0, 3425), (0x1d5b1, 1505), (0x1d5b2, 4046), (0x1d5b3, 1507), (0x1d5b4, 1509),
    (0x1d5b5, 3535), (0x1d5b6, 1511), (0x1d5b7, 3552), (0x1d5b8, 4048), (0x1d5b9, 3437), (0x1d5ba, 5),
    (0x1d5bb, 1519), (0x1d5bc, 1571), (0x1d5bd, 1521), (0x1d5be, 1523), (0x1d5bf, 1577), (0x1d5c0, 1531),
    (0x1d5c1, 872), (0x1d5c2, 1565), (0x1d5c3, 876), (0x1d5c4, 1533), (0x1d5c5, 910), (0x1d5c6, 1535),
    (0x1d5c7, 3389), (0x1d5c8, 24), (0x1d5c9, 1545), (0x1d5ca, 4050), (0x1d5cb, 878), (0x1d5cc, 536),
    (0x1d5cd, 1547), (0x1d5ce, 1549), (0x1d5cf, 1555), (0x1d5d0, 886), (0x1d5d1, 912), (0x1d5d2, 888),
    (0x1d5d3, 1631), (0x1d5d4, 1471), (0x1d5d5, 1475), (0x1d5d6, 3402), (0x1d5d7, 1477), (0x1d5d8, 1479),
    (0x1d5d9, 3441), (0x1d5da, 1483), (0x1d5db, 1485), (0x1d5dc, 1487), (0x1d5dd, 1489), (0x1d5de, 1491),
    (0x1d5df, 1493), (0x1d5e0, 1495), (0x1d5e1, 1497), (0x1d5e2, 1499), (0x1d5e3, 1503), (0x1d5e4, 3425),
    (0x1d5e5, 1505), (0x1d5e6, 4046), (0x1d5e7, 1507), (0x1d5e8, 1509), (0x1d5e9, 3535), (0x1d5ea, 1511),
    (0x1d5eb, 3552), (0x1d5ec, 4048), (0x1d5ed, 3437), (0x1d5ee, 5), (0x1d5ef, 1519), (0x1d5f0, 1571),
    (0x1d5f1, 1521), (0x1d5f2, 1523), (0x1d5f3, 1577), (0x1d5f4, 1531), (0x1d5f5, 872), (0x1d5f6, 1565),
    (0x1d5f7, 876), (0x1d5f8, 1533), (0x1d5f9, 910), (0x1d5fa, 1535), (0x1d5fb, 3389), (0x1d5fc, 24),
    (0x1d5fd, 1545), (0x1d5fe, 4050), (0x1d5ff, 878), (0x1d600, 536), (0x1d601, 1547), (0x1d602, 1549),
    (0x1d603, 1555), (0x1d604, 886), (0x1d605, 912), (0x1d606, 888), (0x1d607, 1631), (0x1d608, 1471),
    (0x1d609, 1475), (0x1d60a, 3402), (0x1d60b, 1477), (0x1d60c, 1479), (0x1d60d, 3441), (0x1d60e, 1483),
    (0x1d60f, 1485), (0x1d610, 1487), (0x1d611, 1489), (0x1d612, 1491), (0x1d613, 1493), (0x1d614, 1495),
    (0x1d615, 1497), (0x1d616, 1499), (0x1d617, 1503), (0x1d618, 3425), (0x1d619, 1505), (0x1d61a, 4046),
    (0x1d61b, 1507), (0x1d61c, 1509), (0x1d61d, 3535), (0x1d61e, 1511), (0x1d61f, 3552), (0x1d620, 4048),
    (0x1d621, 3437), (0x1d622, 5), (0x1d623, 1519), (0x1d624, 1571), (0x1d625, 1521), (0x1d626, 1523),
    (0x1d627, 1577), (0x1d628, 1531), (0x1d629, 872), (0x1d62a, 1565), (0x1d62b, 876), (0x1d62c, 1533),
    (0x1d62d, 910), (0x1d62e, 1535), (0x1d62f, 3389), (0x1d630, 24), (0x1d631, 1545), (0x1d632, 4050),
    (0x1d633, 878), (0x1d634, 536), (0x1d635, 1547), (0x1d636, 1549), (0x1d637, 1555), (0x1d638, 886),
    (0x1d639, 912), (0x1d63a, 888), (0x1d63b, 1631), (0x1d63c, 1471), (0x1d63d, 1475), (0x1d63e, 3402),
    (0x1d63f, 1477), (0x1d640, 1479), (0x1d641, 3441), (0x1d642, 1483), (0x1d643, 1485), (0x1d644, 1487),
    (0x1d645, 1489), (0x1d646, 1491), (0x1d647, 1493), (0x1d648, 1495), (0x1d649, 1497), (0x1d64a, 1499),
    (0x1d64b, 1503), (0x1d64c, 3425), (0x1d64d, 1505), (0x1d64e, 4046), (0x1d64f, 1507), (0x1d650, 1509),
    (0x1d651, 3535), (0x1d652, 1511), (0x1d653, 3552), (0x1d654, 4048), (0x1d655, 3437), (0x1d656, 5),
    (0x1d657, 1519), (0x1d658, 1571), (0x1d659, 1521), (0x1d65a, 1523), (0x1d65b, 1577), (0x1d65c, 1531),
    (0x1d65d, 872), (0x1d65e, 1565), (0x1d65f, 876), (0x1d660, 1533), (0x1d661, 910), (0x1d662, 1535),
    (0x1d663, 3389), (0x1d664, 24), (0x1d665, 1545), (0x1d666, 4050), (0x1d667, 878), (0x1d668, 536),
    (0x1d669, 1547), (0x1d66a, 1549), (0x1d66b, 1555), (0x1d66c, 886), (0x1d66d, 912), (0x1d66e, 888),
    (0x1d66f, 1631), (0x1d670, 1471), (0x1d671, 1475), (0x1d672, 3402), (0x1d673, 1477), (0x1d674, 1479),
    (0x1d675, 3441), (0x1d676, 1483), (0x1d677, 1485), (0x1d678, 1487), (0x1d679, 1489), (0x1d67a, 1491),
    (0x1d67b, 1493), (0x1d67c, 1495), (0x1d67d, 1497), (0x1d67e, 1499), (0x1d67f, 1503), (0x1d680, 3425),
    (0x1d681, 1505), (0x1d682, 4046), (0x1d683, 1507), (0x1d684, 1509), (0x1d685, 3535), (0x1d686, 1511),
    (0x1d687, 3552), (0x1d688, 4048), (0x1d689, 3437), (0x1d68a, 5), (0x1d68b, 1519), (0x1d68c, 1571),
    (0x1d68d, 1521), (0x1d68e, 1523), (0x1d68f, 1577), (0x1d690, 1531), (0x1d691, 872), (0x1d692, 1565),
    (0x1d693, 876), (0x1d694, 1533), (0x1d695, 910), (0x1d696, 1535), (0x1d697, 3389), (0x1d698, 24),
    (0x1d699, 1545), (0x1d69a, 4050), (0x1d69b, 878), (0x1d69c, 536), (0x1d69d, 1547), (0x1d69e, 1549),
    (0x1d69f, 1555), (0x1d6a0, 886), (0x1d6a1, 912), (0x1d6a2, 888), (0x1d6a3, 1631), (0x1d6a4, 9097),
    (0x1d6a5, 9099), (0x1d6a8, 9101), (0x1d6a9, 9103), (0x1d6aa, 3455), (0x1d6ab, 9105), (0x1d6ac, 9107),
    (0x1d6ad, 9109), (0x1d6ae, 9111), (0x1d6af, 1025), (0x1d6b0, 9113), (0x1d6b1, 9115), (0x1d6b2, 9117),
    (0x1d6b3, 9119), (0x1d6b4, 9121), (0x1d6b5, 9123), (0x1d6b6, 9125), (0x1d6b7, 3457), (0x1d6b8, 9127),
    (0x1d6b9, 1025), (0x1d6ba, 1029), (0x1d6bb, 9129), (0x1d6bc, 1007), (0x1d6bd, 9131), (0x1d6be, 9133),
    (0x1d6bf, 9135), (0x1d6c0, 3439), (0x1d6c1, 9137), (0x1d6c2, 9139), (0x1d6c3, 1003), (0x1d6c4, 1559),
    (0x1d6c5, 1561), (0x1d6c6, 1027), (0x1d6c7, 9141), (0x1d6c8, 9143), (0x1d6c9, 1005), (0x1d6ca, 3130),
    (0x1d6cb, 1019), (0x1d6cc, 9145), (0x1d6cd, 17), (0x1d6ce, 9147), (0x1d6cf, 9149), (0x1d6d0, 9151),
    (0x1d6d1, 1017), (0x1d6d2, 1021), (0x1d6d3, 1023), (0x1d6d4, 9153), (0x1d6d5, 9155), (0x1d6d6, 9157),
    (0x1d6d7, 1015), (0x1d6d8, 1563), (0x1d6d9, 9159), (0x1d6da, 9161), (0x1d6db, 9163), (0x1d6dc, 1027),
    (0x1d6dd, 1005), (0x1d6de, 1019), (0x1d6df, 1015), (0x1d6e0, 1021), (0x1d6e1, 1017), (0x1d6e2, 9101),
    (0x1d6e3, 9103), (0x1d6e4, 3455), (0x1d6e5, 9105), (0x1d6e6, 9107), (0x1d6e7, 9109), (0x1d6e8, 9111),
    (0x1d6e9, 1025), (0x1d6ea, 9113), (0x1d6eb, 9115), (0x1d6ec, 9117), (0x1d6ed, 9119), (0x1d6ee, 9121),
    (0x1d6ef, 9123), (0x1d6f0, 9125), (0x1d6f1, 3457), (0x1d6f2, 9127), (0x1d6f3, 1025), (0x1d6f4, 1029),
    (0x1d6f5, 9129), (0x1d6f6, 1007), (0x1d6f7, 9131), (0x1d6f8, 9133), (0x1d6f9, 9135), (0x1d6fa, 3439),
    (0x1d6fb, 9137), (0x1d6fc, 9139), (0x1d6fd, 1003), (0x1d6fe, 1559), (0x1d6ff, 1561), (0x1d700, 1027),
    (0x1d701, 9141), (0x1d702, 9143), (0x1d703, 1005), (0x1d704, 3130), (0x1d705, 1019), (0x1d706, 9145),
    (0x1d707, 17), (0x1d708, 9147), (0x1d709, 9149), (0x1d70a, 9151), (0x1d70b, 1017), (0x1d70c, 1021),
    (0x1d70d, 1023), (0x1d70e, 9153), (0x1d70f, 9155), (0x1d710, 9157), (0x1d711, 1015), (0x1d712, 1563),
    (0x1d713, 9159), (0x1d714, 9161), (0x1d715, 9163), (0x1d716, 1027), (0x1d717, 1005), (0x1d718, 1019),
    (0x1d719, 1015), (0x1d71a, 1021), (0x1d71b, 1017), (0x1d71c, 9101), (0x1d71d, 9103), (0x1d71e, 3455),
    (0x1d71f, 9105), (0x1d720, 9107), (0x1d721, 9109), (0x1d722, 9111), (0x1d723, 1025), (0x1d724, 9113),
    (0x1d725, 9115), (0x1d726, 9117), (0x1d727, 9119), (0x1d728, 9121), (0x1d729, 9123), (0x1d72a, 9125),
    (0x1d72b, 3457), (0x1d72c, 9127), (0x1d72d, 1025), (0x1d72e, 1029), (0x1d72f, 9129), (0x1d730, 1007),
    (0x1d731, 9131), (0x1d732, 9133), (0x1d733, 9135), (0x1d734, 3439), (0x1d735, 9137), (0x1d736, 9139),
    (0x1d737, 1003), (0x1d738, 1559), (0x1d739, 1561), (0x1d73a, 1027), (0x1d73b, 9141), (0x1d73c, 9143),
    (0x1d73d, 1005), (0x1d73e, 3130), (0x1d73f, 1019), (0x1d740, 9145), (0x1d741, 17), (0x1d742, 9147),
    (0x1d743, 9149), (0x1d744, 9151), (0x1d745, 1017), (0x1d746, 1021), (0x1d747, 1023), (0x1d748, 9153),
    (0x1d749, 9155), (0x1d74a, 9157), (0x1d74b, 1015), (0x1d74c, 1563), (0x1d74d, 9159), (0x1d74e, 9161),
    (0x1d74f, 9163), (0x1d750, 1027), (0x1d751, 1005), (0x1d752, 1019), (0x1d753, 1015), (0x1d754, 1021),
    (0x1d755, 1017), (0x1d756, 9101), (0x1d757, 9103), (0x1d758, 3455), (0x1d759, 9105), (0x1d75a, 9107),
    (0x1d75b, 9109), (0x1d75c, 9111), (0x1d75d, 1025), (0x1d75e, 9113), (0x1d75f, 9115), (0x1d760, 9117),
    (0x1d761, 9119), (0x1d762, 9121), (0x1d763, 9123), (0x1d764, 9125), (0x1d765, 3457), (0x1d766, 9127),
    (0x1d767, 1025), (0x1d768, 1029), (0x1d769, 9129), (0x1d76a, 1007), (0x1d76b, 9131), (0x1d76c, 9133),
    (0x1d76d, 9135), (0x1d76e, 3439), (0x1d76f, 9137), (0x1d770, 9139), (0x1d771, 1003), (0x1d772, 1559),
    (0x1d773, 1561), (0x1d774, 1027), (0x1d775, 9141), (0x1d776, 9143), (0x1d777, 1005), (0x1d778, 3130),
    (0x1d779, 1019), (0x1d77a, 9145), (0x1d77b, 17), (0x1d77c, 9147), (0x1d77d, 9149), (0x1d77e, 9151),
    (0x1d77f, 1017), (0x1d780, 1021), (0x1d781, 1023), (0x1d782, 9153), (0x1d783, 9155), (0x1d784, 9157),
    (0x1d785, 1015), (0x1d786, 1563), (0x1d787, 9159), (0x1d788, 9161), (0x1d789, 9163), (0x1d78a, 1027),
    (0x1d78b, 1005), (0x1d78c, 1019), (0x1d78d, 1015), (0x1d78e, 1021), (0x1d78f, 1017), (0x1d790, 9101),
    (0x1d791, 9103), (0x1d792, 3455), (0x1d793, 9105), (0x1d794, 9107), (0x1d795, 9109), (0x1d796, 9111),
    (0x1d797, 1025), (0x1d798, 9113), (0x1d799, 9115), (0x1d79a, 9117), (0x1d79b, 9119), (0x1d79c, 9121),
    (0x1d79d, 9123), (0x1d79e, 9125), (0x1d79f, 3457), (0x1d7a0, 9127), (0x1d7a1, 1025), (0x1d7a2, 1029),
    (0x1d7a3, 9129), (0x1d7a4, 1007), (0x1d7a5, 9131), (0x1d7a6, 9133), (0x1d7a7, 9135), (0x1d7a8, 3439),
    (0x1d7a9, 9137), (0x1d7aa, 9139), (0x1d7ab, 1003), (0x1d7ac, 1559), (0x1d7ad, 1561), (0x1d7ae, 1027),
    (0x1d7af, 9141), (0x1d7b0, 9143), (0x1d7b1, 1005), (0x1d7b2, 3130), (0x1d7b3, 1019), (0x1d7b4, 9145),
    (0x1d7b5, 17), (0x1d7b6, 9147), (0x1d7b7, 9149), (0x1d7b8, 9151), (0x1d7b9, 1017), (0x1d7ba, 1021),
    (0x1d7bb, 1023), (0x1d7bc, 9153), (0x1d7bd, 9155), (0x1d7be, 9157), (0x1d7bf, 1015), (0x1d7c0, 1563),
    (0x1d7c1, 9159), (0x1d7c2, 9161), (0x1d7c3, 9163), (0x1d7c4, 1027), (0x1d7c5, 1005), (0x1d7c6, 1019),
    (0x1d7c7, 1015), (0x1d7c8, 1021), (0x1d7c9, 1017), (0x1d7ca, 9165), (0x1d7cb, 9167), (0x1d7ce, 3365),
    (0x1d7cf, 22), (0x1d7d0, 10), (0x1d7d1, 12), (0x1d7d2, 3367), (0x1d7d3, 3369), (0x1d7d4, 3371),
    (0x1d7d5, 3373), (0x1d7d6, 3375), (0x1d7d7, 3377), (0x1d7d8, 3365), (0x1d7d9, 22), (0x1d7da, 10),
    (0x1d7db, 12), (0x1d7dc, 3367), (0x1d7dd, 3369), (0x1d7de, 3371), (0x1d7df, 3373), (0x1d7e0, 3375),
    (0x1d7e1, 3377), (0x1d7e2, 3365), (0x1d7e3, 22), (0x1d7e4, 10), (0x1d7e5, 12), (0x1d7e6, 3367),
    (0x1d7e7, 3369), (0x1d7e8, 3371), (0x1d7e9, 3373), (0x1d7ea, 3375), (0x1d7eb, 3377), (0x1d7ec, 3365),
    (0x1d7ed, 22), (0x1d7ee, 10), (0x1d7ef, 12), (0x1d7f0, 3367), (0x1d7f1, 3369), (0x1d7f2, 3371),
    (0x1d7f3, 3373), (0x1d7f4, 3375), (0x1d7f5, 3377), (0x1d7f6, 3365), (0x1d7f7, 22), (0x1d7f8, 10),
    (0x1d7f9, 12), (0x1d7fa, 3367), (0x1d7fb, 3369), (0x1d7fc, 3371), (0x1d7fd, 3373), (0x1d7fe, 3375),
    (0x1d7ff, 3377), (0x1ee00, 8759), (0x1ee01, 8761), (0x1ee02, 8769), (0x1ee03, 8775), (0x1ee05, 8813),
    (0x1ee06, 8781), (0x1ee07, 8771), (0x1ee08, 8791), (0x1ee09, 8815), (0x1ee0a, 8803), (0x1ee0b, 8805),
    (0x1ee0c, 8807), (0x1ee0d, 8809), (0x1ee0e, 8783), (0x1ee0f, 8795), (0x1ee10, 8799), (0x1ee11, 8787),
    (0x1ee12, 8801), (0x1ee13, 8779), (0x1ee14, 8785), (0x1ee15, 8765), (0x1ee16, 8767), (0x1ee17, 8773),
    (0x1ee18, 8777), (0x1ee19, 8789), (0x1ee1a, 8793), (0x1ee1b, 8797), (0x1ee1c, 9169), (0x1ee1d, 7623),
    (0x1ee1e, 9171), (0x1ee1f, 9173), (0x1ee21, 8761), (0x1ee22, 8769), (0x1ee24, 8811), (0x1ee27, 8771),
    (0x1ee29, 8815), (0x1ee2a, 8803), (0x1ee2b, 8805), (0x1ee2c, 8807), (0x1ee2d, 8809), (0x1ee2e, 8783),
    (0x1ee2f, 8795), (0x1ee30, 8799), (0x1ee31, 8787), (0x1ee32, 8801), (0x1ee34, 8785), (0x1ee35, 8765),
    (0x1ee36, 8767), (0x1ee37, 8773), (0x1ee39, 8789), (0x1ee3b, 8797), (0x1ee42, 8769), (0x1ee47, 8771),
    (0x1ee49, 8815), (0x1ee4b, 8805), (0x1ee4d, 8809), (0x1ee4e, 8783), (0x1ee4f, 8795), (0x1ee51, 8787),
    (0x1ee52, 8801), (0x1ee54, 8785), (0x1ee57, 8773), (0x1ee59, 8789), (0x1ee5b, 8797), (0x1ee5d, 7623),
    (0x1ee5f, 9173), (0x1ee61, 8761), (0x1ee62, 8769), (0x1ee64, 8811), (0x1ee67, 8771), (0x1ee68, 8791),
    (0x1ee69, 8815), (0x1ee6a, 8803), (0x1ee6c, 8807), (0x1ee6d, 8809), (0x1ee6e, 8783), (0x1ee6f, 8795),
    (0x1ee70, 8799), (0x1ee71, 8787), (0x1ee72, 8801), (0x1ee74, 8785), (0x1ee75, 8765), (0x1ee76, 8767),
    (0x1ee77, 8773), (0x1ee79, 8789), (0x1ee7a, 8793), (0x1ee7b, 8797), (0x1ee7c, 9169), (0x1ee7e, 9171),
    (0x1ee80, 8759), (0x1ee81, 8761), (0x1ee82, 8769), (0x1ee83, 8775), (0x1ee84, 8811), (0x1ee85, 8813),
    (0x1ee86, 8781), (0x1ee87, 8771), (0x1ee88, 8791), (0x1ee89, 8815), (0x1ee8b, 8805), (0x1ee8c, 8807),
    (0x1ee8d, 8809), (0x1ee8e, 8783), (0x1ee8f, 8795), (0x1ee90, 8799), (0x1ee91, 8787), (0x1ee92, 8801),
    (0x1ee93, 8779), (0x1ee94, 8785), (0x1ee95, 8765), (0x1ee96, 8767), (0x1ee97, 8773), (0x1ee98, 8777),
    (0x1ee99, 8789), (0x1ee9a, 8793), (0x1ee9b, 8797), (0x1eea1, 8761), (0x1eea2, 8769), (0x1eea3, 8775),
    (0x1eea5, 8813), (0x1eea6, 8781), (0x1eea7, 8771), (0x1eea8, 8791), (0x1eea9, 8815), (0x1eeab, 8805),
    (0x1eeac, 8807), (0x1eead, 8809), (0x1eeae, 8783), (0x1eeaf, 8795), (0x1eeb0, 8799), (0x1eeb1, 8787),
    (0x1eeb2, 8801), (0x1eeb3, 8779), (0x1eeb4, 8785), (0x1eeb5, 8765), (0x1eeb6, 8767), (0x1eeb7, 8773),
    (0x1eeb8, 8777), (0x1eeb9, 8789), (0x1eeba, 8793), (0x1eebb, 8797), (0x1f100, 9175), (0x1f101, 9178),
    (0x1f102, 9181), (0x1f103, 9184), (0x1f104, 9187), (0x1f105, 9190), (0x1f106, 9193), (0x1f107, 9196),
    (0x1f108, 9199), (0x1f109, 9202), (0x1f10a, 9205), (0x1f110, 9208), (0x1f111, 9212), (0x1f112, 9216),
    (0x1f113, 9220), (0x1f114, 9224), (0x1f115, 9228), (0x1f116, 9232), (0x1f117, 9236), (0x1f118, 9240),
    (0x1f119, 9244), (0x1f11a, 9248), (0x1f11b, 9252), (0x1f11c, 9256), (0x1f11d, 9260), (0x1f11e, 9264),
    (0x1f11f, 9268), (0x1f120, 9272), (0x1f121, 9276), (0x1f122, 9280), (0x1f123, 9284), (0x1f124, 9288),
    (0x1f125, 9292), (0x1f126, 9296), (0x1f127, 9300), (0x1f128, 9304), (0x1f129, 9308), (0x1f12a, 9312),
    (0x1f12b, 3402), (0x1f12c, 1505), (0x1f12d, 9316), (0x1f12e, 9319), (0x1f130, 1471), (0x1f131, 1475),
    (0x1f132, 3402), (0x1f133, 1477), (0x1f134, 1479), (0x1f135, 3441), (0x1f136, 1483), (0x1f137, 1485),
    (0x1f138, 1487), (0x1f139, 1489), (0x1f13a, 1491), (0x1f13b, 1493), (0x1f13c, 1495), (0x1f13d, 1497),
    (0x1f13e, 1499), (0x1f13f, 1503), (0x1f140, 3425), (0x1f141, 1505), (0x1f142, 4046), (0x1f143, 1507),
    (0x1f144, 1509), (0x1f145, 3535), (0x1f146, 1511), (0x1f147, 3552), (0x1f148, 4048), (0x1f149, 3437),
    (0x1f14a, 9322), (0x1f14b, 6340), (0x1f14c, 9325), (0x1f14d, 9328), (0x1f14e, 9331), (0x1f14f, 9335),
    (0x1f16a, 9338), (0x1f16b, 9341), (0x1f16c, 9344), (0x1f190, 9347), (0x1f200, 9350), (0x1f201, 9353),
    (0x1f202, 5488), (0x1f210, 4203), (0x1f211, 9356), (0x1f212, 9358), (0x1f213, 4640), (0x1f214, 4089),
    (0x1f215, 9360), (0x1f216, 9362), (0x1f217, 4901), (0x1f218, 9364), (0x1f219, 9366), (0x1f21a, 9368),
    (0x1f21b, 6965), (0x1f21c, 9370), (0x1f21d, 9372), (0x1f21e, 9374), (0x1f21f, 9376), (0x1f220, 9378),
    (0x1f221, 9380), (0x1f222, 4275), (0x1f223, 9382), (0x1f224, 9384), (0x1f225, 9386), (0x1f226, 9388),
    (0x1f227, 9390), (0x1f228, 9392), (0x1f229, 4077), (0x1f22a, 4885), (0x1f22b, 9394), (0x1f22c, 5350),
    (0x1f22d, 4891), (0x1f22e, 5352), (0x1f22f, 9396), (0x1f230, 4387), (0x1f231, 9398), (0x1f232, 9400),
    (0x1f233, 9402), (0x1f234, 9404), (0x1f235, 9406), (0x1f236, 5316), (0x1f237, 4223), (0x1f238, 9408),
    (0x1f239, 9410), (0x1f23a, 9412), (0x1f23b, 9414), (0x1f240, 9416), (0x1f241, 9420), (0x1f242, 9424),
    (0x1f243, 9428), (0x1f244, 9432), (0x1f245, 9436), (0x1f246, 9440), (0x1f247, 9444), (0x1f248, 9448),
    (0x1f250, 9452), (0x1f251, 9454), (0x1fbf0, 3365), (0x1fbf1, 22), (0x1fbf2, 10), (0x1fbf3, 12),
    (0x1fbf4, 3367), (0x1fbf5, 3369), (0x1fbf6, 3371), (0x1fbf7, 3373), (0x1fbf8, 3375), (0x1fbf9, 3377),
];

