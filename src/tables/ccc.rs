// ccc.rs - Generated by tools/gen_tables.py (UCD 14.0.0). Do not edit.
//
// Non-zero Canonical_Combining_Class runs: (start, end, ccc).

pub static COMBINING_CLASS_RUNS: &[(u32, u32, u8)] = &[
    (0x300, 0x315, 230), (0x315, 0x316, 232), (0x316, 0x31a, 220), (0x31a, 0x31b, 232),
    (0x31b, 0x31c, 216), (0x31c, 0x321, 220), (0x321, 0x323, 202), (0x323, 0x327, 220),
    (0x327, 0x329, 202), (0x329, 0x334, 220), (0x334, 0x339, 1), (0x339, 0x33d, 220),
    (0x33d, 0x345, 230), (0x345, 0x346, 240), (0x346, 0x347, 230), (0x347, 0x34a, 220),
    (0x34a, 0x34d, 230), (0x34d, 0x34f, 220), (0x350, 0x353, 230), (0x353, 0x357, 220),
    (0x357, 0x358, 230), (0x358, 0x359, 232), (0x359, 0x35b, 220), (0x35b, 0x35c, 230),
    (0x35c, 0x35d, 233), (0x35d, 0x35f, 234), (0x35f, 0x360, 233), (0x360, 0x362, 234),
    (0x362, 0x363, 233), (0x363, 0x370, 230), (0x483, 0x488, 230), (0x591, 0x592, 220),
    (0x592, 0x596, 230), (0x596, 0x597, 220), (0x597, 0x59a, 230), (0x59a, 0x59b, 222),
    (0x59b, 0x59c, 220), (0x59c, 0x5a2, 230), (0x5a2, 0x5a8, 220), (0x5a8, 0x5aa, 230),
    (0x5aa, 0x5ab, 220), (0x5ab, 0x5ad, 230), (0x5ad, 0x5ae, 222), (0x5ae, 0x5af, 228),
    (0x5af, 0x5b0, 230), (0x5b0, 0x5b1, 10), (0x5b1, 0x5b2, 11), (0x5b2, 0x5b3, 12),
    (0x5b3, 0x5b4, 13), (0x5b4, 0x5b5, 14), (0x5b5, 0x5b6, 15), (0x5b6, 0x5b7, 16),
    (0x5b7, 0x5b8, 17), (0x5b8, 0x5b9, 18), (0x5b9, 0x5bb, 19), (0x5bb, 0x5bc, 20),
    (0x5bc, 0x5bd, 21), (0x5bd, 0x5be, 22), (0x5bf, 0x5c0, 23), (0x5c1, 0x5c2, 24),
    (0x5c2, 0x5c3, 25), (0x5c4, 0x5c5, 230), (0x5c5, 0x5c6, 220), (0x5c7, 0x5c8, 18),
    (0x610, 0x618, 230), (0x618, 0x619, 30), (0x619, 0x61a, 31), (0x61a, 0x61b, 32),
    (0x64b, 0x64c, 27), (0x64c, 0x64d, 28), (0x64d, 0x64e, 29), (0x64e, 0x64f, 30),
    (0x64f, 0x650, 31), (0x650, 0x651, 32), (0x651, 0x652, 33), (0x652, 0x653, 34),
    (0x653, 0x655, 230), (0x655, 0x657, 220), (0x657, 0x65c, 230), (0x65c, 0x65d, 220),
    (0x65d, 0x65f, 230), (0x65f, 0x660, 220), (0x670, 0x671, 35), (0x6d6, 0x6dd, 230),
    (0x6df, 0x6e3, 230), (0x6e3, 0x6e4, 220), (0x6e4, 0x6e5, 230), (0x6e7, 0x6e9, 230),
    (0x6ea, 0x6eb, 220), (0x6eb, 0x6ed, 230), (0x6ed, 0x6ee, 220), (0x711, 0x712, 36),
    (0x730, 0x731, 230), (0x731, 0x732, 220), (0x732, 0x734, 230), (0x734, 0x735, 220),
    (0x735, 0x737, 230), (0x737, 0x73a, 220), (0x73a, 0x73b, 230), (0x73b, 0x73d, 220),
    (0x73d, 0x73e, 230), (0x73e, 0x73f, 220), (0x73f, 0x742, 230), (0x742, 0x743, 220),
    (0x743, 0x744, 230), (0x744, 0x745, 220), (0x745, 0x746, 230), (0x746, 0x747, 220),
    (0x747, 0x748, 230), (0x748, 0x749, 220), (0x749, 0x74b, 230), (0x7eb, 0x7f2, 230),
    (0x7f2, 0x7f3, 220), (0x7f3, 0x7f4, 230), (0x7fd, 0x7fe, 220), (0x816, 0x81a, 230),
    (0x81b, 0x824, 230), (0x825, 0x828, 230), (0x829, 0x82e, 230), (0x859, 0x85c, 220),
    (0x898, 0x899, 230), (0x899, 0x89c, 220), (0x89c, 0x8a0, 230), (0x8ca, 0x8cf, 230),
    (0x8cf, 0x8d4, 220), (0x8d4, 0x8e2, 230), (0x8e3, 0x8e4, 220), (0x8e4, 0x8e6, 230),
    (0x8e6, 0x8e7, 220), (0x8e7, 0x8e9, 230), (0x8e9, 0x8ea, 220), (0x8ea, 0x8ed, 230),
    (0x8ed, 0x8f0, 220), (0x8f0, 0x8f1, 27), (0x8f1, 0x8f2, 28), (0x8f2, 0x8f3, 29),
    (0x8f3, 0x8f6, 230), (0x8f6, 0x8f7, 220), (0x8f7, 0x8f9, 230), (0x8f9, 0x8fb, 220),
    (0x8fb, 0x900, 230), (0x93c, 0x93d, 7), (0x94d, 0x94e, 9), (0x951, 0x952, 230),
    (0x952, 0x953, 220), (0x953, 0x955, 230), (0x9bc, 0x9bd, 7), (0x9cd, 0x9ce, 9),
    (0x9fe, 0x9ff, 230), (0xa3c, 0xa3d, 7), (0xa4d, 0xa4e, 9), (0xabc, 0xabd, 7),
    (0xacd, 0xace, 9), (0xb3c, 0xb3d, 7), (0xb4d, 0xb4e, 9), (0xbcd, 0xbce, 9),
    (0xc3c, 0xc3d, 7), (0xc4d, 0xc4e, 9), (0xc55, 0xc56, 84), (0xc56, 0xc57, 91),
    (0xcbc, 0xcbd, 7), (0xccd, 0xcce, 9), (0xd3b, 0xd3d, 9), (0xd4d, 0xd4e, 9),
    (0xdca, 0xdcb, 9), (0xe38, 0xe3a, 103), (0xe3a, 0xe3b, 9), (0xe48, 0xe4c, 107),
    (0xeb8, 0xeba, 118), (0xeba, 0xebb, 9), (0xec8, 0xecc, 122), (0xf18, 0xf1a, 220),
    (0xf35, 0xf36, 220), (0xf37, 0xf38, 220), (0xf39, 0xf3a, 216), (0xf71, 0xf72, 129),
    (0xf72, 0xf73, 130), (0xf74, 0xf75, 132), (0xf7a, 0xf7e, 130), (0xf80, 0xf81, 130),
    (0xf82, 0xf84, 230), (0xf84, 0xf85, 9), (0xf86, 0xf88, 230), (0xfc6, 0xfc7, 220),
    (0x1037, 0x1038, 7), (0x1039, 0x103b, 9), (0x108d, 0x108e, 220), (0x135d, 0x1360, 230),
    (0x1714, 0x1716, 9), (0x1734, 0x1735, 9), (0x17d2, 0x17d3, 9), (0x17dd, 0x17de, 230),
    (0x18a9, 0x18aa, 228), (0x1939, 0x193a, 222), (0x193a, 0x193b, 230), (0x193b, 0x193c, 220),
    (0x1a17, 0x1a18, 230), (0x1a18, 0x1a19, 220), (0x1a60, 0x1a61, 9), (0x1a75, 0x1a7d, 230),
    (0x1a7f, 0x1a80, 220), (0x1ab0, 0x1ab5, 230), (0x1ab5, 0x1abb, 220), (0x1abb, 0x1abd, 230),
    (0x1abd, 0x1abe, 220), (0x1abf, 0x1ac1, 220), (0x1ac1, 0x1ac3, 230), (0x1ac3, 0x1ac5, 220),
    (0x1ac5, 0x1aca, 230), (0x1aca, 0x1acb, 220), (0x1acb, 0x1acf, 230), (0x1b34, 0x1b35, 7),
    (0x1b44, 0x1b45, 9), (0x1b6b, 0x1b6c, 230), (0x1b6c, 0x1b6d, 220), (0x1b6d, 0x1b74, 230),
    (0x1baa, 0x1bac, 9), (0x1be6, 0x1be7, 7), (0x1bf2, 0x1bf4, 9), (0x1c37, 0x1c38, 7),
    (0x1cd0, 0x1cd3, 230), (0x1cd4, 0x1cd5, 1), (0x1cd5, 0x1cda, 220), (0x1cda, 0x1cdc, 230),
    (0x1cdc, 0x1ce0, 220), (0x1ce0, 0x1ce1, 230), (0x1ce2, 0x1ce9, 1), (0x1ced, 0x1cee, 220),
    (0x1cf4, 0x1cf5, 230), (0x1cf8, 0x1cfa, 230), (0x1dc0, 0x1dc2, 230), (0x1dc2, 0x1dc3, 220),
    (0x1dc3, 0x1dca, 230), (0x1dca, 0x1dcb, 220), (0x1dcb, 0x1dcd, 230), (0x1dcd, 0x1dce, 234),
    (0x1dce, 0x1dcf, 214), (0x1dcf, 0x1dd0, 220), (0x1dd0, 0x1dd1, 202), (0x1dd1, 0x1df6, 230),
    (0x1df6, 0x1df7, 232), (0x1df7, 0x1df9, 228), (0x1df9, 0x1dfa, 220), (0x1dfa, 0x1dfb, 218),
    (0x1dfb, 0x1dfc, 230), (0x1dfc, 0x1dfd, 233), (0x1dfd, 0x1dfe, 220), (0x1dfe, 0x1dff, 230),
    (0x1dff, 0x1e00, 220), (0x20d0, 0x20d2, 230), (0x20d2, 0x20d4, 1), (0x20d4, 0x20d8, 230),
    (0x20d8, 0x20db, 1), (0x20db, 0x20dd, 230), (0x20e1, 0x20e2, 230), (0x20e5, 0x20e7, 1),
    (0x20e7, 0x20e8, 230), (0x20e8, 0x20e9, 220), (0x20e9, 0x20ea, 230), (0x20ea, 0x20ec, 1),
    (0x20ec, 0x20f0, 220), (0x20f0, 0x20f1, 230), (0x2cef, 0x2cf2, 230), (0x2d7f, 0x2d80, 9),
    (0x2de0, 0x2e00, 230), (0x302a, 0x302b, 218), (0x302b, 0x302c, 228), (0x302c, 0x302d, 232),
    (0x302d, 0x302e, 222), (0x302e, 0x3030, 224), (0x3099, 0x309b, 8), (0xa66f, 0xa670, 230),
    (0xa674, 0xa67e, 230), (0xa69e, 0xa6a0, 230), (0xa6f0, 0xa6f2, 230), (0xa806, 0xa807, 9),
    (0xa82c, 0xa82d, 9), (0xa8c4, 0xa8c5, 9), (0xa8e0, 0xa8f2, 230), (0xa92b, 0xa92e, 220),
    (0xa953, 0xa954, 9), (0xa9b3, 0xa9b4, 7), (0xa9c0, 0xa9c1, 9), (0xaab0, 0xaab1, 230),
    (0xaab2, 0xaab4, 230), (0xaab4, 0xaab5, 220), (0xaab7, 0xaab9, 230), (0xaabe, 0xaac0, 230),
    (0xaac1, 0xaac2, 230), (0xaaf6, 0xaaf7, 9), (0xabed, 0xabee, 9), (0xfb1e, 0xfb1f, 26),
    (0xfe20, 0xfe27, 230), (0xfe27, 0xfe2e, 220), (0xfe2e, 0xfe30, 230), (0x101fd, 0x101fe, 220),
    (0x102e0, 0x102e1, 220), (0x10376, 0x1037b, 230), (0x10a0d, 0x10a0e, 220), (0x10a0f, 0x10a10, 230),
    (0x10a38, 0x10a39, 230), (0x10a39, 0x10a3a, 1), (0x10a3a, 0x10a3b, 220), (0x10a3f, 0x10a40, 9),
    (0x10ae5, 0x10ae6, 230), (0x10ae6, 0x10ae7, 220), (0x10d24, 0x10d28, 230), (0x10eab, 0x10ead, 230),
    (0x10f46, 0x10f48, 220), (0x10f48, 0x10f4b, 230), (0x10f4b, 0x10f4c, 220), (0x10f4c, 0x10f4d, 230),
    (0x10f4d, 0x10f51, 220), (0x10f82, 0x10f83, 230), (0x10f83, 0x10f84, 220), (0x10f84, 0x10f85, 230),
    (0x10f85, 0x10f86, 220), (0x11046, 0x11047, 9), (0x11070, 0x11071, 9), (0x1107f, 0x11080, 9),
    (0x110b9, 0x110ba, 9), (0x110ba, 0x110bb, 7), (0x11100, 0x11103, 230), (0x11133, 0x11135, 9),
    (0x11173, 0x11174, 7), (0x111c0, 0x111c1, 9), (0x111ca, 0x111cb, 7), (0x11235, 0x11236, 9),
    (0x11236, 0x11237, 7), (0x112e9, 0x112ea, 7), (0x112ea, 0x112eb, 9), (0x1133b, 0x1133d, 7),
    (0x1134d, 0x1134e, 9), (0x11366, 0x1136d, 230), (0x11370, 0x11375, 230), (0x11442, 0x11443, 9),
    (0x11446, 0x11447, 7), (0x1145e, 0x1145f, 230), (0x114c2, 0x114c3, 9), (0x114c3, 0x114c4, 7),
    (0x115bf, 0x115c0, 9), (0x115c0, 0x115c1, 7), (0x1163f, 0x11640, 9), (0x116b6, 0x116b7, 9),
    (0x116b7, 0x116b8, 7), (0x1172b, 0x1172c, 9), (0x11839, 0x1183a, 9), (0x1183a, 0x1183b, 7),
    (0x1193d, 0x1193f, 9), (0x11943, 0x11944, 7), (0x119e0, 0x119e1, 9), (0x11a34, 0x11a35, 9),
    (0x11a47, 0x11a48, 9), (0x11a99, 0x11a9a, 9), (0x11c3f, 0x11c40, 9), (0x11d42, 0x11d43, 7),
    (0x11d44, 0x11d46, 9), (0x11d97, 0x11d98, 9), (0x16af0, 0x16af5, 1), (0x16b30, 0x16b37, 230),
    (0x16ff0, 0x16ff2, 6), (0x1bc9e, 0x1bc9f, 1), (0x1d165, 0x1d167, 216), (0x1d167, 0x1d16a, 1),
    (0x1d16d, 0x1d16e, 226), (0x1d16e, 0x1d173, 216), (0x1d17b, 0x1d183, 220), (0x1d185, 0x1d18a, 230),
    (0x1d18a, 0x1d18c, 220), (0x1d1aa, 0x1d1ae, 230), (0x1d242, 0x1d245, 230), (0x1e000, 0x1e007, 230),
    (0x1e008, 0x1e019, 230), (0x1e01b, 0x1e022, 230), (0x1e023, 0x1e025, 230), (0x1e026, 0x1e02b, 230),
    (0x1e130, 0x1e137, 230), (0x1e2ae, 0x1e2af, 230), (0x1e2ec, 0x1e2f0, 230), (0x1e8d0, 0x1e8d7, 220),
    (0x1e944, 0x1e94a, 230), (0x1e94a, 0x1e94b, 7),
];
