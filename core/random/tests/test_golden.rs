//! Reference sequences for the generator.
//!
//! Every sequence starts from the same seed. A change in any of them means
//! the cipher or the state machine no longer produces the published
//! streams, which silently changes the output of every downstream user.

use tfgen::TfGen;

fn reference_gen() -> TfGen {
    TfGen::new(
        0x0000_0000_0000_0000,
        0x89ab_cdef_0123_4567,
        0x0123_4567_89ab_cdef,
        0xffff_ffff_ffff_ffff,
    )
}

fn advanced_gen() -> TfGen {
    let mut gen = reference_gen();
    for _ in 0..100 {
        gen.next_u32().unwrap();
    }
    gen
}

fn take(gen: &mut TfGen, n: usize) -> Vec<u32> {
    (0..n).map(|_| gen.next_u32().unwrap()).collect()
}

#[test]
fn test_first_words() {
    let mut gen = reference_gen();
    assert_eq!(take(&mut gen, FIRST_WORDS.len()), FIRST_WORDS);
}

#[test]
fn test_next_after_100() {
    let mut gen = advanced_gen();
    assert_eq!(take(&mut gen, 100), NEXT_AFTER_100);
}

#[test]
fn test_split_after_100() {
    let mut parent = advanced_gen();
    let mut child = parent.split().unwrap();

    assert_eq!(take(&mut parent, 100), SPLIT_PARENT);
    assert_eq!(take(&mut child, 100), SPLIT_CHILD);
}

#[test]
fn test_split_n_after_100() {
    let mut parent = advanced_gen();
    let mut child = parent.split_n(32, 256).unwrap();

    assert_eq!(take(&mut child, 100), SPLIT_N_CHILD);
}

#[test]
fn test_level_after_split_n() {
    let mut parent = advanced_gen();
    let mut child = parent.split_n(32, 256).unwrap();
    child.level().unwrap();

    assert_eq!(child.path().depth(), 0);
    assert_eq!(take(&mut child, 100), SPLIT_N_LEVELED);
}

#[test]
fn test_split_past_full_path() {
    let mut parent = reference_gen();
    for _ in 0..64 {
        parent.split().unwrap();
    }
    assert!(parent.path().is_full());

    let mut child = parent.split().unwrap();
    assert_eq!(parent.path().depth(), 1);
    assert_eq!(child.path().bits(), 1);
    assert_eq!(take(&mut parent, 8), REKEYED_PARENT);
    assert_eq!(take(&mut child, 8), REKEYED_CHILD);
}

#[test]
fn test_split_n_overflowing_path() {
    let mut parent = reference_gen();
    for _ in 0..40 {
        parent.split().unwrap();
    }

    let mut child = parent.split_n(32, 0xdead_beef).unwrap();
    assert_eq!(child.path().depth(), 8);
    assert_eq!(child.path().bits(), 0xde);
    assert_eq!(take(&mut child, 8), OVERFLOW_CHILD);

    let mut exact = parent.split_n(24, 0xdead_beef).unwrap();
    assert!(exact.path().is_full());
    assert_eq!(take(&mut exact, 8), FULL_DEPTH_CHILD);
}

const FIRST_WORDS: [u32; 16] = [
    0x04a809c1, 0x7e8fdb45, 0x1008ed8a, 0x92510bc1, 0xc9b476e1, 0xa0c0c0f7,
    0xd4c4e21b, 0xc1ee0997, 0x147aef18, 0x38c4b981, 0x9d0814dd, 0x1206c5c5,
    0x7cef482b, 0x20ec1e9f, 0x21da6e58, 0x7fc64660,
];

const NEXT_AFTER_100: [u32; 100] = [
    0x9eb0c638, 0x2c8923da, 0xebfbeb8c, 0x5c85d787, 0x5f330d57, 0x8c72ec21,
    0x4e5dd417, 0xef281b47, 0x2340aaf9, 0xd70ca050, 0x3d6af200, 0x8fa10920,
    0xab55e97e, 0xbf470922, 0x4b058ac9, 0x53826a64, 0x4c061511, 0xb79744c4,
    0x6d7c8063, 0x930f66e7, 0x64731bca, 0xa6c3d52c, 0xcb572e8b, 0xc8508591,
    0xafc5e986, 0x3e8103f7, 0xd83ddfbd, 0x8266fa22, 0x27b4d545, 0x42956a81,
    0x5d87724e, 0x474d8da6, 0xd26243c1, 0x336743fa, 0x6d220023, 0x07fd9583,
    0x58d92968, 0x984f7a05, 0x3834a0db, 0xc2859d15, 0xcd5bd243, 0x49c1a601,
    0x7425d214, 0x67fb6417, 0x9ac6aa8d, 0x0ee7db8c, 0x0e14471a, 0xddb24ea4,
    0x181c4993, 0x50c0347b, 0x6e8b7402, 0xe07c7328, 0x7a482052, 0x40387ea3,
    0xb55934e9, 0x74c3f701, 0xe03ce561, 0x76d4db32, 0x04616671, 0xc7b8ef22,
    0xd3bec14b, 0xe7bbd065, 0x2f69ab44, 0x88184e42, 0x61dfe41e, 0x24a4012d,
    0xe284c75c, 0xba859b92, 0x5a0829b9, 0xa76736cc, 0x6bec2d76, 0xede26849,
    0x0efe8fd9, 0x53e6f40e, 0xf816ad7c, 0x6e0acb2a, 0x2cc1bab1, 0xbaec582e,
    0xf886c51f, 0x6c90ec7c, 0xa1ff77ff, 0xc85be74b, 0x59a1b1a7, 0x447f1bb9,
    0x35ff7110, 0x81f0afc8, 0xb73dc083, 0x2eb41b56, 0xea54ac5b, 0x22c80338,
    0x761b3309, 0x5041cc89, 0xd8ac9c25, 0x4a6e7646, 0x005e50e0, 0x04cd467d,
    0x7b6c3848, 0x95866bc1, 0x61c53468, 0x7cc132d0,
];

const SPLIT_PARENT: [u32; 100] = [
    0x1f47b19d, 0x016b5bdd, 0xdd3fb934, 0x199dda20, 0xd271b549, 0xe37b5d98,
    0x7a5a4dde, 0x8055f311, 0xea0179df, 0x4a433ea6, 0x763d6ff1, 0x52832e73,
    0xe748d861, 0x45b7884d, 0x1481e4c1, 0xdd4d1e31, 0x71a4e5cc, 0x25950277,
    0x29fb870f, 0x418757fa, 0x544519c1, 0x1e1b818d, 0x7da42b46, 0x9530e118,
    0x1efa07bf, 0xe9dadea6, 0xf96a0e13, 0xf191f26c, 0xa31917f9, 0x4482322f,
    0x3fd72cb9, 0x7ddc70c2, 0x4ce0f22c, 0xd5d69fd5, 0xb06bf8c4, 0xce245401,
    0x8fa319cb, 0xd53a2549, 0x8887e524, 0x0aa2cb64, 0xe694f0a0, 0x249ddd66,
    0x7e02952c, 0xdc4e29a2, 0x98197549, 0x1d4813a4, 0x8a01733a, 0x2f1ca396,
    0x2be10a50, 0xc4721e30, 0xd8ebdd12, 0xc0f856ba, 0x3f804cd3, 0xbf8862ad,
    0x46858ce1, 0x26da3fec, 0x16d05328, 0xe8c98a5c, 0x2f74999e, 0x4c6cf739,
    0xe053c3b5, 0x87ed0c42, 0x9b7e326d, 0xf882011b, 0x14f9b862, 0x4e129d8e,
    0x19212213, 0x324dbf78, 0x14d8a692, 0x2648f63b, 0x1764f569, 0x005a2e16,
    0x7d8a331c, 0xb70aa49b, 0x0b59d834, 0x45581cd0, 0xd61e81b8, 0xcbb42e69,
    0x0ca40864, 0x5a4a43f1, 0xda76d357, 0x22d94dcc, 0xbf1bd921, 0x5872d823,
    0xb6d64375, 0xdfb80021, 0xf1a9c60d, 0x4a4e35f2, 0x581742a3, 0xb7bc7443,
    0x27f0e905, 0x24ef30c6, 0x91a88b9f, 0xf38660ea, 0x830ea0eb, 0xe4907b31,
    0xc0e2f924, 0xd8e94866, 0x81f0a03f, 0x3ca10fd5,
];

const SPLIT_CHILD: [u32; 100] = [
    0x13b02d7e, 0x33420939, 0x0ccd76b6, 0x9884ae91, 0x8d4fe542, 0xaa89ef8c,
    0x4cd7032f, 0x8c432f27, 0x7da38fd2, 0x25ea0a93, 0x42a95f80, 0x26594e29,
    0x0e8abcf1, 0xe0711c9e, 0x48558ae9, 0xb6823c61, 0xa56ea412, 0x647d0f8c,
    0x5c29ced4, 0x81bc6bd1, 0x6f0a1d2b, 0xe813ca58, 0xb94f63a0, 0xec95b5be,
    0x4e5aa643, 0x27fa04d0, 0x07bcf79c, 0xf535a2ad, 0xe2565c92, 0x25820b8d,
    0xb76834ba, 0xf2b165f7, 0x59a076b1, 0xb21a0fe8, 0xaf14f522, 0x19223dfe,
    0x6c62393b, 0xa45ea97b, 0xdc1dc644, 0x10cbc2b3, 0xcda459b2, 0xb0610352,
    0xb56e6ae1, 0xb26fda19, 0x248a2897, 0xc0387366, 0xa2f92c1f, 0xc7eb68d5,
    0x58610951, 0xf53061ee, 0x8189f45c, 0xec745fc4, 0x9ee02d42, 0x2b53289c,
    0xfeeed222, 0x1e258e9b, 0xc8cba431, 0x7015d008, 0x8ee3fce7, 0x65c3c0fa,
    0x984f7550, 0x676303a3, 0xae590bba, 0x436ea61b, 0xec5b0a60, 0x27dc5d2a,
    0x8e625a6e, 0xeff12479, 0xcb66928c, 0xd07dc292, 0x8e1dbd18, 0x3302bc1f,
    0x1571034f, 0x391eab58, 0x4c2efce8, 0x435dd1e0, 0x791e9d88, 0x681e68ec,
    0x43f55d81, 0x983bdc46, 0x93b5ec41, 0x77b77c95, 0x0e364e5c, 0xecd561ed,
    0x2cd9628a, 0xf884b069, 0x2fdeca38, 0xa77b8c9f, 0xf5c8d782, 0x80129297,
    0xe0206ea6, 0x5bfb3d09, 0x12986567, 0xe87d24fb, 0x8b82061e, 0x1c9ccdd8,
    0x4439b77c, 0x1e8691ff, 0xd52f1255, 0x89fd41d9,
];

const SPLIT_N_CHILD: [u32; 100] = [
    0x1e639621, 0x194fc84f, 0xc360d6ef, 0x32cf9a06, 0xc321d2d6, 0xad69a766,
    0x60d6d850, 0xdeba6199, 0xe8736ec0, 0x3467f358, 0xd9a8a4c0, 0x4e6217d1,
    0xffb5816c, 0xa6b82c8c, 0x4e057146, 0x65eff42e, 0x93a49a08, 0xf4cce45f,
    0xe5d50b97, 0x8021ed3d, 0xee89b6ae, 0x3d9d77f2, 0xfa07f9fa, 0x11044547,
    0xadaf8ba1, 0x844e38a4, 0x98831f14, 0xd5600848, 0xf2f34641, 0x67a7f527,
    0xc27d86ca, 0xa3bfedc5, 0xcef7eace, 0x732692e7, 0xc8caf4db, 0x96c8280f,
    0xba533761, 0xb98cd7eb, 0x589064a7, 0x51fa518a, 0x9f128718, 0x0245e214,
    0xe0536de2, 0xb36434f0, 0x195f0f28, 0x6d25640f, 0x9b994d76, 0x379f7e25,
    0x5cbde4dd, 0x25a47e9c, 0x873655e7, 0xd598a950, 0x397983ed, 0x7f99d33a,
    0x3914110d, 0x3160eca2, 0xc6a27a74, 0x69664c82, 0xd688709c, 0x294b2fde,
    0xbc0d4285, 0xb2d5d167, 0xe1a84a93, 0x659e370c, 0xce7a8e87, 0xe760f731,
    0x747f159a, 0x4665f179, 0xbabea1ee, 0xa733423e, 0xb82d49a8, 0x911d8e89,
    0x80d41a8c, 0xe1be1426, 0xc930b9fc, 0x9aa56e86, 0xa21a020e, 0x163e5478,
    0x11441730, 0xd67d5c2a, 0x3eefd440, 0xd3f0e774, 0xd6000d75, 0x568abc64,
    0x424c7811, 0x2e73b761, 0x43b9ef6d, 0xcbdae6e7, 0xb87309ab, 0xe85a6d54,
    0x81749785, 0xc472faa3, 0xab88a207, 0x58ba7f76, 0x312ca0d5, 0xc8cb9c62,
    0x1b383688, 0x6305e69c, 0x19ea1566, 0x2aad1b73,
];

const SPLIT_N_LEVELED: [u32; 100] = [
    0x4b267c74, 0x131831c4, 0xb019ebb3, 0x702cbe2d, 0x200c5c07, 0x8acd8da2,
    0xfe4b58fc, 0x54ba11e0, 0xe1a3000d, 0xdae8cbe2, 0xfb284551, 0x5a2f7d4e,
    0xd11e508b, 0x54442c1b, 0xd1b115d8, 0x27273371, 0x1f76c386, 0x5aae0481,
    0x251b4bb0, 0x0cb5ee6e, 0x37d44955, 0xfb4be861, 0x04eb281f, 0x5e100511,
    0xf70ef8b5, 0xba88ca8b, 0x32de5ac8, 0x141c1d2d, 0x04969146, 0xf253e519,
    0x0f72d4f0, 0xb06417f9, 0x67ed778f, 0xee10c826, 0xb5fc7037, 0x53dca064,
    0x2ca12d71, 0x9806ef34, 0x726352b2, 0x54f99113, 0x000a56ad, 0x0ca1a9c8,
    0xef9e3150, 0x10962ce0, 0x535eb4d9, 0xf9eea95a, 0x6f1e985b, 0x5583c8aa,
    0x0352672a, 0x122213c7, 0xe1e7be2b, 0x84c4a155, 0xc83885a3, 0x9f53c4f6,
    0xe4429855, 0x6cc43dab, 0xc1fa3a9b, 0xbef285fa, 0xf9738fb3, 0xa33529b8,
    0xc76a0dfb, 0x333a573e, 0x5ecaee6f, 0xc4fc66a3, 0x6b520e83, 0x14699076,
    0x761ef6c8, 0x9d85765a, 0x623d0d56, 0x3b8e0586, 0x7906c7ab, 0x20ad448f,
    0x0992ed03, 0x18e66e37, 0xf29fef7e, 0xec8c7af4, 0x5ad8b5b3, 0x1d6d38c8,
    0x4afa07d0, 0x74e0c568, 0xd8ee74f5, 0xe8423dab, 0xa618dcc8, 0x6562fbc9,
    0x831038ae, 0xb65cf114, 0x4429e5ee, 0x7331816b, 0xb78683be, 0xc7c00f6a,
    0x8a177ae5, 0x4fcd12e3, 0x322624b1, 0xacecc6ef, 0x2b507479, 0x0f77f50d,
    0xd13446c3, 0x4e4b8f62, 0x053855dd, 0x21b8417f,
];

const REKEYED_PARENT: [u32; 8] = [
    0x736d28fc, 0xd031c401, 0xe4ba978d, 0x644d5deb, 0x83287a7a, 0xac268ae1,
    0xdb7c691e, 0x50fb1e23,
];

const REKEYED_CHILD: [u32; 8] = [
    0xad71e2c2, 0xae54820e, 0xf8d4e51b, 0x0a71f790, 0xe5817664, 0x11b90a7a,
    0xc5a91700, 0x74753e20,
];

const OVERFLOW_CHILD: [u32; 8] = [
    0x6d15d618, 0x221a4995, 0x46c80771, 0x19c8be7d, 0xf0200ddf, 0x3c4db5f6,
    0xda35d3b4, 0x9c25b585,
];

const FULL_DEPTH_CHILD: [u32; 8] = [
    0xe7718b55, 0xf328301b, 0x9176fb6b, 0xdb5d7fe6, 0x5fdd7e7d, 0x3917e435,
    0xc665ae0a, 0x7e862ab9,
];
