//! Built-in named colors.
//!
//! The RGB and Oklab sets hold the same fifty names; IPT is derived from the
//! RGB set at startup. Values are packed bits in each space's layout.

use phf::phf_map;

/// RGB, ABGR bit order.
pub static RGB_NAMED: phf::Map<&'static str, u32> = phf_map! {
    "transparent" => 0x0000_0000,
    "black" => 0xFE00_0000,
    "gray" => 0xFE80_8080,
    "silver" => 0xFEB6_B6B6,
    "white" => 0xFEFF_FFFF,
    "red" => 0xFE00_00FF,
    "orange" => 0xFE00_7FFF,
    "yellow" => 0xFE00_FFFF,
    "green" => 0xFE00_FF00,
    "blue" => 0xFEFF_0000,
    "indigo" => 0xFEE0_0F52,
    "violet" => 0xFEEF_4090,
    "purple" => 0xFEFF_00C0,
    "brown" => 0xFE3B_578F,
    "pink" => 0xFEE0_A0FF,
    "magenta" => 0xFEF5_00F5,
    "brick" => 0xFE4A_52D5,
    "ember" => 0xFE32_5AF5,
    "salmon" => 0xFE62_62FF,
    "chocolate" => 0xFE18_3868,
    "tan" => 0xFE8C_B4D2,
    "bronze" => 0xFE31_8ECE,
    "cinnamon" => 0xFE1D_69D2,
    "apricot" => 0xFE28_A8FF,
    "peach" => 0xFE81_BFFF,
    "pear" => 0xFE30_E3D3,
    "saffron" => 0xFE10_D5FF,
    "butter" => 0xFE88_F2FF,
    "chartreuse" => 0xFE41_FFC8,
    "cactus" => 0xFE00_A030,
    "lime" => 0xFE00_D393,
    "olive" => 0xFE00_8081,
    "fern" => 0xFE42_794E,
    "moss" => 0xFE08_4620,
    "celery" => 0xFE73_FF7D,
    "sage" => 0xFEC5_E3AB,
    "jade" => 0xFE3F_BF3F,
    "cyan" => 0xFEFF_FF00,
    "mint" => 0xFED4_FF7F,
    "teal" => 0xFE7F_7F00,
    "turquoise" => 0xFEC9_D62E,
    "sky" => 0xFEE0_C010,
    "cobalt" => 0xFEAB_4600,
    "denim" => 0xFEB8_8830,
    "navy" => 0xFE80_0000,
    "lavender" => 0xFEFF_91B9,
    "plum" => 0xFEC6_0DBE,
    "mauve" => 0xFEAB_73AB,
    "rose" => 0xFE78_1EE6,
    "raspberry" => 0xFE37_1491,
};

/// Oklab, `[alpha][B][A][L]`.
pub static OKLAB_NAMED: phf::Map<&'static str, u32> = phf_map! {
    "transparent" => 0x007F_7F00,
    "black" => 0xFE7F_7F00,
    "gray" => 0xFE7F_80A1,
    "silver" => 0xFE7F_80CC,
    "white" => 0xFE7F_80FF,
    "red" => 0xFE90_9CA0,
    "orange" => 0xFE93_8CBE,
    "yellow" => 0xFE99_76F7,
    "green" => 0xFE96_62DD,
    "blue" => 0xFE58_7B73,
    "indigo" => 0xFE5F_8877,
    "violet" => 0xFE65_8F96,
    "purple" => 0xFE64_9B9E,
    "brown" => 0xFE88_878B,
    "pink" => 0xFE7A_8ED5,
    "magenta" => 0xFE6A_A2AE,
    "brick" => 0xFE89_92A1,
    "ember" => 0xFE8E_93AE,
    "salmon" => 0xFE88_95B6,
    "chocolate" => 0xFE89_866B,
    "tan" => 0xFE87_81CE,
    "bronze" => 0xFE90_84B7,
    "cinnamon" => 0xFE8F_8BA7,
    "apricot" => 0xFE93_85D0,
    "peach" => 0xFE8B_85DD,
    "pear" => 0xFE95_76E2,
    "saffron" => 0xFE97_7DE4,
    "butter" => 0xFE8F_7CF4,
    "chartreuse" => 0xFE95_71EF,
    "cactus" => 0xFE91_6BA4,
    "lime" => 0xFE95_6FCF,
    "olive" => 0xFE90_7A9C,
    "fern" => 0xFE88_768F,
    "moss" => 0xFE89_7560,
    "celery" => 0xFE8F_6BE6,
    "sage" => 0xFE82_78E1,
    "jade" => 0xFE8F_6BBA,
    "cyan" => 0xFE7A_6CE7,
    "mint" => 0xFE82_70EB,
    "teal" => 0xFE7C_7391,
    "turquoise" => 0xFE7D_6FCE,
    "sky" => 0xFE76_71C2,
    "cobalt" => 0xFE6A_7B72,
    "denim" => 0xFE74_779F,
    "navy" => 0xFE66_7D49,
    "lavender" => 0xFE6F_89C2,
    "plum" => 0xFE6D_9C95,
    "mauve" => 0xFE78_8AA9,
    "rose" => 0xFE7F_9E9D,
    "raspberry" => 0xFE84_9572,
};

/// Extra names for existing colors. Shared by every space.
pub static ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "grey" => "gray",
    "gold" => "saffron",
    "puce" => "mauve",
    "sand" => "tan",
    "skin" => "peach",
    "coral" => "salmon",
    "azure" => "sky",
    "ocean" => "teal",
    "sapphire" => "cobalt",
};
