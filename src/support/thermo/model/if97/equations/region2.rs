//! Region 2: superheated and supercritical vapor.
//!
//! The backward equations split the region into three subregions.
//! Subregion 2a covers pressures up to 4 MPa.
//! Above that, 2b and 2c are divided by the B2bc curve in `(p, h)` and by
//! the `s = 5.85` kJ/(kg·K) isentrope otherwise.

use super::{Gibbs, Term, boundary, polynomial};

/// Reducing temperature in K.
const T_STAR: f64 = 540.0;

/// Pressure separating subregion 2a from 2b and 2c, in MPa.
const P_2A_MAX: f64 = 4.0;

/// Entropy separating subregion 2b from 2c, in kJ/(kg·K).
pub(crate) const S_2BC: f64 = 5.85;

/// Reducing entropy of the subregion 2b backward temperature, in kJ/(kg·K).
#[allow(clippy::approx_constant)]
const S_STAR_2B: f64 = 0.7853;

const IDEAL: [(i32, f64); 9] = [
    (0, -9.692_768_650_021_7),
    (1, 10.086_655_968_018),
    (-5, -0.005_608_791_128_302),
    (-4, 0.071_452_738_081_455),
    (-3, -0.407_104_982_239_28),
    (-2, 1.424_081_917_144_4),
    (-1, -4.383_951_131_945),
    (2, -0.284_086_324_607_72),
    (3, 0.021_268_463_753_307),
];

const RESIDUAL: [Term; 43] = [
    (1, 0, -1.773_174_247_321_3e-3),
    (1, 1, -0.017_834_862_292_358),
    (1, 2, -0.045_996_013_696_365),
    (1, 3, -0.057_581_259_083_432),
    (1, 6, -0.050_325_278_727_93),
    (2, 1, -3.303_264_167_020_3e-5),
    (2, 2, -1.894_898_751_631_5e-4),
    (2, 4, -3.939_277_724_335_5e-3),
    (2, 7, -0.043_797_295_650_573),
    (2, 36, -2.667_454_791_408_7e-5),
    (3, 0, 2.048_173_769_230_9e-8),
    (3, 1, 4.387_066_728_443_5e-7),
    (3, 3, -3.227_767_723_857e-5),
    (3, 6, -1.503_392_454_214_8e-3),
    (3, 35, -0.040_668_253_562_649),
    (4, 1, -7.884_730_955_936_7e-10),
    (4, 2, 1.279_071_785_228_5e-8),
    (4, 3, 4.822_537_271_850_7e-7),
    (5, 7, 2.292_207_633_766_1e-6),
    (6, 3, -1.671_476_645_106_1e-11),
    (6, 16, -2.117_147_232_135_5e-3),
    (6, 35, -23.895_741_934_104),
    (7, 0, -5.905_956_432_427e-18),
    (7, 11, -1.262_180_889_910_1e-6),
    (7, 25, -0.038_946_842_435_739),
    (8, 8, 1.125_621_136_045_9e-11),
    (8, 36, -8.231_134_089_799_8),
    (9, 13, 1.980_971_280_208_8e-8),
    (10, 4, 1.040_696_521_017_4e-19),
    (10, 10, -1.023_474_709_592_9e-13),
    (10, 14, -1.001_817_937_951_1e-9),
    (16, 29, -8.088_290_864_698_5e-11),
    (16, 50, 0.106_930_318_794_09),
    (18, 57, -0.336_622_505_741_71),
    (20, 20, 8.918_584_535_542_1e-25),
    (20, 35, 3.062_931_687_623_2e-13),
    (20, 48, -4.200_246_769_820_8e-6),
    (21, 21, -5.905_602_968_563_9e-26),
    (22, 53, 3.782_694_761_345_7e-6),
    (23, 39, -1.276_860_893_468_1e-15),
    (24, 26, 7.308_761_059_506_1e-29),
    (24, 40, 5.541_471_535_077_8e-17),
    (24, 58, -9.436_970_724_121e-7),
];

const T_PH_2A: [Term; 34] = [
    (0, 0, 1_089.895_231_828_8),
    (0, 1, 849.516_544_955_35),
    (0, 2, -107.817_480_918_26),
    (0, 3, 33.153_654_801_263),
    (0, 7, -7.423_201_679_024_8),
    (0, 20, 11.765_048_724_356),
    (1, 0, 1.844_574_935_579),
    (1, 1, -4.179_270_054_962_4),
    (1, 2, 6.247_819_693_581_2),
    (1, 3, -17.344_563_108_114),
    (1, 7, -200.581_768_620_96),
    (1, 9, 271.960_654_737_96),
    (1, 11, -455.113_182_858_18),
    (1, 18, 3_091.968_860_475_5),
    (1, 44, 252_266.403_578_72),
    (2, 0, -6.170_742_286_833_9e-3),
    (2, 2, -0.310_780_466_295_83),
    (2, 7, 11.670_873_077_107),
    (2, 36, 128_127_984.040_46),
    (2, 38, -985_549_096.232_76),
    (2, 40, 2_822_454_697.300_2),
    (2, 42, -3_594_897_141.070_3),
    (2, 44, 1_722_734_991.319_7),
    (3, 24, -13_551.334_240_775),
    (3, 44, 12_848_734.664_65),
    (4, 12, 1.386_572_428_322_6),
    (4, 32, 235_988.325_565_14),
    (4, 44, -13_105_236.545_054),
    (5, 32, 7_399.983_547_476_6),
    (5, 36, -551_966.970_300_6),
    (5, 42, 3_715_408.599_623_3),
    (6, 34, 19_127.729_239_66),
    (6, 44, -415_351.648_356_34),
    (7, 28, -62.459_855_192_507),
];

const T_PH_2B: [Term; 38] = [
    (0, 0, 1_489.504_107_951_6),
    (0, 1, 743.077_983_140_34),
    (0, 2, -97.708_318_797_837),
    (0, 12, 2.474_246_470_567_4),
    (0, 18, -0.632_813_200_160_26),
    (0, 24, 1.138_595_212_965_8),
    (0, 28, -0.478_118_636_486_25),
    (0, 40, 8.520_812_343_154_4e-3),
    (1, 0, 0.937_471_473_779_32),
    (1, 2, 3.359_311_860_491_6),
    (1, 6, 3.380_935_560_145_4),
    (1, 12, 0.168_445_396_719_04),
    (1, 18, 0.738_757_452_366_95),
    (1, 24, -0.471_287_374_361_86),
    (1, 28, 0.150_202_731_397_07),
    (1, 40, -2.176_411_421_975e-3),
    (2, 2, -0.021_810_755_324_761),
    (2, 8, -0.108_297_844_036_77),
    (2, 18, -0.046_333_324_635_812),
    (2, 40, 7.128_035_195_955_1e-5),
    (3, 1, 1.103_283_178_999_9e-4),
    (3, 2, 1.895_524_838_790_2e-4),
    (3, 12, 3.089_154_116_053_7e-3),
    (3, 24, 1.355_550_455_494_9e-3),
    (4, 2, 2.864_023_747_745_6e-7),
    (4, 12, -1.077_985_735_751_2e-5),
    (4, 18, -7.646_271_245_481_4e-5),
    (4, 24, 1.405_239_281_831_6e-5),
    (4, 28, -3.108_381_433_143_4e-5),
    (4, 40, -1.030_273_821_210_3e-6),
    (5, 18, 2.821_728_163_504e-7),
    (5, 24, 1.270_490_227_194_5e-6),
    (5, 40, 7.380_335_346_829_2e-8),
    (6, 28, -1.103_013_923_890_9e-8),
    (7, 2, -8.145_636_520_783_3e-14),
    (7, 28, -2.518_054_568_296_2e-11),
    (9, 1, -1.756_523_396_940_7e-18),
    (9, 40, 8.693_415_634_416_3e-15),
];

const T_PH_2C: [Term; 23] = [
    (-7, 0, -3_236_839_855_524.2),
    (-7, 4, 7_326_335_090_218.1),
    (-6, 0, 358_250_899_454.47),
    (-6, 2, -583_401_318_515.9),
    (-5, 0, -10_783_068_217.47),
    (-5, 2, 20_825_544_563.171),
    (-2, 0, 610_747.835_645_16),
    (-2, 1, 859_777.225_355_8),
    (-1, 0, -25_745.723_604_17),
    (-1, 2, 31_081.088_422_714),
    (0, 0, 1_208.231_586_593_6),
    (0, 1, 482.197_551_092_55),
    (1, 4, 3.796_600_127_248_6),
    (1, 8, -10.842_984_880_077),
    (2, 4, -0.045_364_172_676_66),
    (6, 0, 1.455_911_565_869_8e-13),
    (6, 1, 1.126_159_740_723e-12),
    (6, 4, -1.780_498_224_068_6e-11),
    (6, 10, 1.232_457_969_083_2e-7),
    (6, 12, -1.160_692_113_098_4e-6),
    (6, 16, 2.784_636_708_855_4e-5),
    (6, 20, -5.927_003_847_417_6e-4),
    (6, 22, 1.291_858_299_187_8e-3),
];

/// The 2a entropy equation has fractional pressure exponents.
const T_PS_2A: [(f64, i32, f64); 46] = [
    (-1.5, -24, -392_359.838_619_84),
    (-1.5, -23, 515_265.738_272_7),
    (-1.5, -19, 40_482.443_161_048),
    (-1.5, -13, -321.937_909_239_02),
    (-1.5, -11, 96.961_424_218_694),
    (-1.5, -10, -22.867_846_371_773),
    (-1.25, -19, -449_429.141_243_57),
    (-1.25, -15, -5_011.833_602_016_6),
    (-1.25, -6, 0.356_844_635_600_15),
    (-1.0, -26, 44_235.335_848_19),
    (-1.0, -21, -13_673.388_811_708),
    (-1.0, -17, 421_632.602_078_64),
    (-1.0, -16, 22_516.925_837_475),
    (-1.0, -9, 474.421_448_656_46),
    (-1.0, -8, -149.311_307_976_47),
    (-0.75, -15, -197_811.263_204_52),
    (-0.75, -14, -23_554.399_470_76),
    (-0.5, -26, -19_070.616_302_076),
    (-0.5, -13, 55_375.669_883_164),
    (-0.5, -9, 3_829.369_143_736_3),
    (-0.5, -7, -603.918_605_805_67),
    (-0.25, -27, 1_936.310_262_033_1),
    (-0.25, -25, 4_266.064_369_861),
    (-0.25, -11, -5_978.063_887_271_8),
    (-0.25, -6, -704.014_639_268_62),
    (0.25, 1, 338.367_841_075_53),
    (0.25, 4, 20.862_786_635_187),
    (0.25, 8, 0.033_834_172_656_196),
    (0.25, 11, -4.312_442_841_489_3e-5),
    (0.5, 0, 166.537_913_564_12),
    (0.5, 1, -139.862_920_558_98),
    (0.5, 5, -0.788_495_479_998_72),
    (0.5, 6, 0.072_132_411_753_872),
    (0.5, 10, -5.975_483_939_828_3e-3),
    (0.5, 14, -1.214_135_895_390_4e-5),
    (0.5, 16, 2.322_709_673_387_1e-7),
    (0.75, 0, -10.538_463_566_194),
    (0.75, 4, 2.071_892_549_650_2),
    (0.75, 9, -0.072_193_155_260_427),
    (0.75, 17, 2.074_988_708_112e-7),
    (1.0, 7, -0.018_340_657_911_379),
    (1.0, 18, 2.903_627_234_869_6e-7),
    (1.25, 3, 0.210_375_278_936_19),
    (1.25, 15, 2.568_123_972_999_9e-4),
    (1.5, 5, -0.012_799_002_933_781),
    (1.5, 18, -8.219_810_265_201_8e-6),
];

const T_PS_2B: [Term; 44] = [
    (-6, 0, 316_876.650_834_97),
    (-6, 11, 20.864_175_881_858),
    (-5, 0, -398_593.998_035_99),
    (-5, 11, -21.816_058_518_877),
    (-4, 0, 223_697.851_942_42),
    (-4, 1, -2_784.170_344_581_7),
    (-4, 11, 9.920_743_607_148),
    (-3, 0, -75_197.512_299_157),
    (-3, 1, 2_970.860_595_115_8),
    (-3, 11, -3.440_687_854_852_6),
    (-3, 12, 0.388_155_642_491_15),
    (-2, 0, 17_511.295_085_75),
    (-2, 1, -1_423.711_285_444_9),
    (-2, 6, 1.094_380_336_416_7),
    (-2, 10, 0.899_716_193_084_95),
    (-1, 0, -3_375.974_009_895_8),
    (-1, 1, 471.628_858_183_55),
    (-1, 5, -1.918_824_199_367_9),
    (-1, 8, 0.410_785_804_921_96),
    (-1, 9, -0.334_653_781_720_97),
    (0, 0, 1_387.003_477_750_5),
    (0, 1, -406.633_261_958_38),
    (0, 2, 41.727_347_159_61),
    (0, 4, 2.193_254_943_453_2),
    (0, 5, -1.032_005_000_907_7),
    (0, 6, 0.358_829_435_167_03),
    (0, 9, 5.251_145_372_606_6e-3),
    (1, 0, 12.838_916_450_705),
    (1, 1, -2.864_243_721_938_1),
    (1, 2, 0.569_126_836_648_55),
    (1, 3, -0.099_962_954_584_931),
    (1, 7, -3.263_203_777_845_9e-3),
    (1, 8, 2.332_092_257_672_3e-4),
    (2, 0, -0.153_348_098_574_5),
    (2, 1, 0.029_072_288_239_902),
    (2, 5, 3.753_470_274_116_7e-4),
    (3, 0, 1.729_669_170_241_1e-3),
    (3, 1, -3.855_605_084_450_4e-4),
    (3, 3, -3.501_771_229_260_8e-5),
    (4, 0, -1.456_639_363_149_2e-5),
    (4, 1, 5.642_085_726_726_9e-6),
    (5, 0, 4.128_615_007_460_5e-8),
    (5, 1, -2.068_467_111_882_4e-8),
    (5, 2, 1.640_939_367_472_5e-9),
];

const T_PS_2C: [Term; 30] = [
    (-2, 0, 909.685_010_053_65),
    (-2, 1, 2_404.566_708_842),
    (-1, 0, -591.623_263_871_3),
    (0, 0, 541.454_041_280_74),
    (0, 1, -270.983_084_111_92),
    (0, 2, 979.765_250_979_26),
    (0, 3, -469.667_729_594_35),
    (1, 0, 14.399_274_604_723),
    (1, 1, -19.104_204_230_429),
    (1, 3, 5.329_916_711_197_1),
    (1, 4, -21.252_975_375_934),
    (2, 0, -0.311_473_344_137_6),
    (2, 1, 0.603_348_408_946_23),
    (2, 2, -0.042_764_839_702_509),
    (3, 0, 5.818_559_725_525_9e-3),
    (3, 1, -0.014_597_008_284_753),
    (3, 5, 5.663_117_563_102_7e-3),
    (4, 0, -7.615_586_458_457_7e-5),
    (4, 1, 2.244_034_291_933_2e-4),
    (4, 4, -1.256_109_501_341_3e-5),
    (5, 0, 6.332_313_266_093_4e-7),
    (5, 1, -2.054_198_967_537_5e-6),
    (5, 2, 3.640_537_039_008_2e-8),
    (6, 0, -2.975_989_778_921_5e-9),
    (6, 1, 1.013_661_852_976_3e-8),
    (7, 0, 5.992_571_969_235_1e-12),
    (7, 1, -2.067_787_010_516_4e-11),
    (7, 3, -2.087_427_818_188_6e-11),
    (7, 4, 1.016_216_682_508_9e-10),
    (7, 5, -1.642_982_828_134_7e-10),
];

const P_HS_2A: [Term; 29] = [
    (0, 1, -1.825_753_619_230_32e-2),
    (0, 3, -0.125_229_548_799_536),
    (0, 6, 0.592_290_437_320_145),
    (0, 16, 6.047_697_061_851_22),
    (0, 20, 238.624_965_444_474),
    (0, 22, -298.639_090_222_922),
    (1, 0, 0.051_225_081_304_075),
    (1, 1, -0.437_266_515_606_486),
    (1, 2, 0.413_336_902_999_504),
    (1, 3, -5.164_682_545_747_73),
    (1, 5, -5.570_148_384_457_11),
    (1, 6, 12.855_503_782_447_8),
    (1, 10, 11.414_410_895_329),
    (1, 16, -119.504_225_652_714),
    (1, 20, -2_847.779_859_615_6),
    (1, 22, 4_317.578_464_080_06),
    (2, 3, 1.128_940_408_026_5),
    (2, 16, 1_974.091_862_063_19),
    (2, 20, 1_516.124_447_060_87),
    (3, 0, 1.413_244_514_212_35e-2),
    (3, 2, 0.585_501_282_219_601),
    (3, 3, -2.972_580_758_630_12),
    (3, 6, 5.945_673_148_473_19),
    (3, 16, -6_236.565_657_989_05),
    (4, 16, 9_659.862_351_333_32),
    (5, 3, 6.815_009_349_481_34),
    (5, 16, -6_332.072_868_244_89),
    (6, 3, -5.589_192_244_657_6),
    (7, 1, 4.006_457_984_720_63e-2),
];

const P_HS_2B: [Term; 33] = [
    (0, 0, 8.014_969_899_294_95e-2),
    (0, 1, -0.543_862_807_146_111),
    (0, 2, 0.337_455_597_421_283),
    (0, 4, 8.905_554_511_574_5),
    (0, 8, 313.840_736_431_485),
    (1, 0, 0.797_367_065_977_789),
    (1, 1, -1.216_169_735_562_4),
    (1, 2, 8.728_033_869_374_77),
    (1, 3, -16.976_978_175_760_2),
    (1, 5, -186.552_827_328_416),
    (1, 12, 95_115.927_434_423_7),
    (2, 1, -18.916_851_012_049_4),
    (2, 6, -4_334.070_371_948_4),
    (2, 18, 543_212_633.012_715),
    (3, 0, 0.144_793_408_386_013),
    (3, 1, 128.024_559_637_516),
    (3, 7, -67_230.953_407_126_8),
    (3, 12, 33_697_238.009_528_7),
    (4, 1, -586.634_196_762_72),
    (4, 16, -22_140_322_476.988_9),
    (5, 1, 1_716.066_687_083_89),
    (5, 12, -570_817_595.806_302),
    (6, 1, -3_121.096_931_784_82),
    (6, 8, -2_078_413.846_330_1),
    (6, 18, 3_056_059_461_577.86),
    (7, 1, 3_221.570_043_143_33),
    (7, 16, 326_810_259_797.295),
    (8, 1, -1_441.041_589_344_87),
    (8, 3, 410.694_867_802_691),
    (8, 14, 109_077_066_873.024),
    (8, 18, -24_796_465_425_889.3),
    (12, 10, 1_888_019_068.651_34),
    (14, 16, -123_651_009_018_773.0),
];

const P_HS_2C: [Term; 31] = [
    (0, 0, 0.112_225_607_199_012),
    (0, 1, -3.390_059_536_067_12),
    (0, 2, -32.050_391_173_009_4),
    (0, 3, -197.597_305_104_9),
    (0, 4, -407.693_861_553_446),
    (0, 8, 13_294.377_522_233_1),
    (1, 0, 1.708_468_397_740_07),
    (1, 2, 37.369_419_814_224_5),
    (1, 5, 3_581.443_658_154_34),
    (1, 8, 423_014.446_424_664),
    (1, 14, -751_071_025.760_063),
    (2, 2, 52.344_612_760_789_8),
    (2, 3, -228.351_290_812_417),
    (2, 7, -960_652.417_056_937),
    (2, 10, -80_705_929.252_607_4),
    (2, 18, 1_626_980_172_256.69),
    (3, 0, 0.772_465_073_604_171),
    (3, 5, 46_392.997_383_774_6),
    (3, 8, -13_731_788.513_412_8),
    (3, 16, 1_704_703_926_305.12),
    (3, 18, -25_110_462_818_730.8),
    (4, 18, 31_774_883_083_552.0),
    (5, 1, 53.868_562_367_531_2),
    (5, 4, -55_308.909_462_516_9),
    (5, 6, -1_028_615.224_214_05),
    (5, 14, 2_042_494_187_562.34),
    (6, 8, 273_918_446.626_977),
    (6, 18, -2.639_631_463_126_85e15),
    (10, 7, -1_078_908_541.080_88),
    (12, 7, -29_649_262_098.012_4),
    (16, 10, -1.117_549_073_234_24e15),
];

fn gibbs(p: f64, t: f64) -> Gibbs {
    let pi = p;
    let tau = T_STAR / t;

    let mut gamma = pi.ln();
    let mut gamma_tau = 0.0;
    for &(j, n) in &IDEAL {
        gamma += n * tau.powi(j);
        gamma_tau += n * f64::from(j) * tau.powi(j - 1);
    }
    let mut gamma_pi = 1.0 / pi;

    let y = tau - 0.5;
    for &(i, j, n) in &RESIDUAL {
        gamma += n * pi.powi(i) * y.powi(j);
        gamma_pi += n * f64::from(i) * pi.powi(i - 1) * y.powi(j);
        gamma_tau += n * pi.powi(i) * f64::from(j) * y.powi(j - 1);
    }

    Gibbs {
        pi,
        tau,
        gamma,
        gamma_pi,
        gamma_tau,
    }
}

pub(crate) fn v_pt(p: f64, t: f64) -> f64 {
    gibbs(p, t).specific_volume(p, t)
}

pub(crate) fn u_pt(p: f64, t: f64) -> f64 {
    gibbs(p, t).internal_energy(t)
}

pub(crate) fn h_pt(p: f64, t: f64) -> f64 {
    gibbs(p, t).enthalpy(t)
}

pub(crate) fn s_pt(p: f64, t: f64) -> f64 {
    gibbs(p, t).entropy()
}

/// Backward temperature from pressure and enthalpy.
pub(crate) fn t_ph(p: f64, h: f64) -> f64 {
    let eta = h / 2000.0;
    if p < P_2A_MAX {
        polynomial(&T_PH_2A, p, eta - 2.1)
    } else if p < boundary::b2bc_p(h) {
        polynomial(&T_PH_2B, p - 2.0, eta - 2.6)
    } else {
        polynomial(&T_PH_2C, p + 25.0, eta - 1.8)
    }
}

/// Backward temperature from pressure and entropy.
pub(crate) fn t_ps(p: f64, s: f64) -> f64 {
    if p < P_2A_MAX {
        let y = s / 2.0 - 2.0;
        T_PS_2A
            .iter()
            .map(|&(i, j, n)| n * p.powf(i) * y.powi(j))
            .sum()
    } else if s < S_2BC {
        polynomial(&T_PS_2C, p, 2.0 - s / 2.9251)
    } else {
        polynomial(&T_PS_2B, p, 10.0 - s / S_STAR_2B)
    }
}

/// Backward pressure from enthalpy and entropy.
pub(crate) fn p_hs(h: f64, s: f64) -> f64 {
    if h < boundary::h2ab_s(s) {
        4.0 * polynomial(&P_HS_2A, h / 4200.0 - 0.5, s / 12.0 - 1.2).powi(4)
    } else if s < S_2BC {
        100.0 * polynomial(&P_HS_2C, h / 3500.0 - 0.7, s / 5.9 - 1.1).powi(4)
    } else {
        100.0 * polynomial(&P_HS_2B, h / 4100.0 - 0.6, s / 7.9 - 1.01).powi(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn forward_properties_match_verification_table() {
        let cases = [
            (0.0035, 300.0, 39.491_386_6, 2_411.691_6, 2_549.911_45, 8.522_389_67),
            (0.0035, 700.0, 92.301_589_8, 3_012.628_19, 3_335.683_75, 10.174_999_6),
            (30.0, 700.0, 0.005_429_466_19, 2_468.610_76, 2_631.494_74, 5.175_402_98),
        ];

        for (p, t, v, u, h, s) in cases {
            assert_relative_eq!(v_pt(p, t), v, max_relative = 1e-8);
            assert_relative_eq!(u_pt(p, t), u, max_relative = 1e-8);
            assert_relative_eq!(h_pt(p, t), h, max_relative = 1e-8);
            assert_relative_eq!(s_pt(p, t), s, max_relative = 1e-8);
        }
    }

    #[test]
    fn backward_temperature_from_enthalpy_covers_each_subregion() {
        let cases = [
            (0.001, 3000.0, 534.433_241),
            (3.0, 3000.0, 575.373_37),
            (3.0, 4000.0, 1_010.775_77),
            (5.0, 3500.0, 801.299_102),
            (5.0, 4000.0, 1_015.315_83),
            (25.0, 3500.0, 875.279_054),
            (40.0, 2700.0, 743.056_411),
            (60.0, 2700.0, 791.137_067),
            (60.0, 3200.0, 882.756_86),
        ];

        for (p, h, t) in cases {
            assert_relative_eq!(t_ph(p, h), t, max_relative = 1e-7);
        }
    }

    #[test]
    fn backward_temperature_from_entropy_covers_each_subregion() {
        let cases = [
            (0.1, 7.5, 399.517_097),
            (0.1, 8.0, 514.127_081),
            (2.5, 8.0, 1_039.849_17),
            (8.0, 6.0, 600.484_04),
            (8.0, 7.5, 1_064.955_56),
            (90.0, 6.0, 1_038.011_26),
            (20.0, 5.75, 697.992_849),
            (80.0, 5.25, 854.011_484),
            (80.0, 5.75, 949.017_998),
        ];

        for (p, s, t) in cases {
            assert_relative_eq!(t_ps(p, s), t, max_relative = 1e-7);
        }
    }

    #[test]
    fn backward_pressure_covers_each_subregion() {
        let cases = [
            (2800.0, 6.5, 1.371_012_767),
            (2800.0, 9.5, 0.001_879_743_844),
            (4100.0, 9.5, 0.102_478_899_7),
            (2800.0, 6.0, 4.793_911_442),
            (3600.0, 6.0, 83.955_192_09),
            (3600.0, 7.0, 7.527_161_441),
            (2800.0, 5.1, 94.392_020_6),
            (2800.0, 5.8, 8.414_574_124),
            (3400.0, 5.8, 83.769_038_79),
        ];

        for (h, s, p) in cases {
            assert_relative_eq!(p_hs(h, s), p, max_relative = 1e-7);
        }
    }
}
