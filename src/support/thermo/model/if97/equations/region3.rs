//! Region 3: the near-critical region, described in density and temperature.
//!
//! Backward equations split the region into 3a (liquid-like) and 3b
//! (vapor-like) along the B3ab curve in `(p, h)` and along the critical
//! isentrope otherwise.

use super::{R, RHO_CRIT, S_CRIT, T_CRIT, Term, boundary, polynomial};

/// Coefficient of the `ln δ` term.
const N1: f64 = 1.065_807_002_851_3;

const HELMHOLTZ: [Term; 39] = [
    (0, 0, -15.732_845_290_239),
    (0, 1, 20.944_396_974_307),
    (0, 2, -7.686_770_787_871_6),
    (0, 7, 2.618_594_778_795_4),
    (0, 10, -2.808_078_114_862),
    (0, 12, 1.205_336_969_651_7),
    (0, 23, -8.456_681_281_250_2e-3),
    (1, 2, -1.265_431_547_771_4),
    (1, 6, -1.152_440_780_668_1),
    (1, 15, 0.885_210_439_843_18),
    (1, 17, -0.642_077_651_816_07),
    (2, 0, 0.384_934_601_866_71),
    (2, 2, -0.852_147_088_242_06),
    (2, 6, 4.897_228_154_187_7),
    (2, 7, -3.050_261_725_696_5),
    (2, 22, 0.039_420_536_879_154),
    (2, 26, 0.125_584_084_243_08),
    (3, 0, -0.279_993_296_987_1),
    (3, 2, 1.389_979_956_946),
    (3, 4, -2.018_991_502_357),
    (3, 16, -8.214_763_717_396_3e-3),
    (3, 26, -0.475_960_357_349_23),
    (4, 0, 0.043_984_074_473_5),
    (4, 2, -0.444_764_354_287_39),
    (4, 4, 0.905_720_707_197_33),
    (4, 26, 0.705_224_500_879_67),
    (5, 1, 0.107_705_126_263_32),
    (5, 3, -0.329_136_232_589_54),
    (5, 26, -0.508_710_620_411_58),
    (6, 0, -0.022_175_400_873_096),
    (6, 2, 0.094_260_751_665_092),
    (6, 26, 0.164_362_784_479_61),
    (7, 2, -0.013_503_372_241_348),
    (8, 26, -0.014_834_345_352_472),
    (9, 2, 5.792_295_362_808_4e-4),
    (9, 26, 3.230_890_470_371_1e-3),
    (10, 0, 8.096_480_299_621_5e-5),
    (10, 1, -1.655_767_979_503_7e-4),
    (11, 26, -4.492_389_906_181_5e-5),
];

const T_PH_3A: [Term; 31] = [
    (-12, 0, -1.336_456_678_112_15e-7),
    (-12, 1, 4.559_126_568_029_78e-6),
    (-12, 2, -1.462_946_407_009_79e-5),
    (-12, 6, 6.393_413_129_700_8e-3),
    (-12, 14, 372.783_927_268_847),
    (-12, 16, -7_186.543_774_604_47),
    (-12, 20, 573_494.752_103_4),
    (-12, 22, -2_675_693.291_114_39),
    (-10, 1, -3.340_662_833_026_14e-5),
    (-10, 5, -2.454_792_140_695_97e-2),
    (-10, 12, 47.808_784_776_499_6),
    (-8, 0, 7.646_641_318_189_04e-6),
    (-8, 2, 1.283_506_276_769_72e-3),
    (-8, 4, 1.712_190_813_773_31e-2),
    (-8, 10, -8.510_073_045_832_13),
    (-5, 2, -1.365_134_616_297_81e-2),
    (-3, 0, -3.844_609_975_966_57e-6),
    (-2, 1, 3.374_238_079_116_55e-3),
    (-2, 3, -0.551_624_873_066_791),
    (-2, 4, 0.729_202_277_107_47),
    (-1, 0, -9.925_227_573_760_41e-3),
    (-1, 2, -0.119_308_831_407_288),
    (0, 0, 0.793_929_190_615_421),
    (0, 1, 0.454_270_731_799_386),
    (1, 1, 0.209_998_591_259_91),
    (3, 0, -6.421_098_239_047_38e-3),
    (3, 1, -0.023_515_586_860_454),
    (4, 0, 2.522_331_083_416_12e-3),
    (4, 3, -7.648_851_333_681_19e-3),
    (10, 4, 1.361_764_275_742_91e-2),
    (12, 5, -1.330_278_835_756_69e-2),
];

const T_PH_3B: [Term; 33] = [
    (-12, 0, 3.232_545_736_449_2e-5),
    (-12, 1, -1.275_755_565_871_81e-4),
    (-10, 0, -4.758_518_773_560_68e-4),
    (-10, 1, 1.561_830_141_816_02e-3),
    (-10, 5, 0.105_724_860_113_781),
    (-10, 10, -85.851_422_113_253_4),
    (-10, 12, 724.140_095_480_911),
    (-8, 0, 2.964_758_102_732_57e-3),
    (-8, 1, -5.927_219_833_659_88e-3),
    (-8, 2, -1.263_054_228_186_66e-2),
    (-8, 4, -0.115_716_196_364_853),
    (-8, 10, 84.900_096_973_959_5),
    (-6, 0, -1.086_022_600_866_15e-2),
    (-6, 1, 1.543_044_753_288_51e-2),
    (-6, 2, 7.504_554_415_244_66e-2),
    (-4, 0, 2.525_209_736_129_82e-2),
    (-4, 1, -6.025_079_012_329_96e-2),
    (-3, 5, -3.076_222_213_505_01),
    (-2, 0, -5.740_119_598_648_79e-2),
    (-2, 4, 5.034_713_609_398_49),
    (-1, 2, -0.925_081_888_584_834),
    (-1, 4, 3.917_338_829_175_46),
    (-1, 6, -77.314_600_713_019),
    (-1, 10, 9_493.087_620_985_87),
    (-1, 14, -1_410_437.196_794_09),
    (-1, 16, 8_491_662.308_190_26),
    (0, 0, 0.861_095_729_446_704),
    (0, 2, 0.323_346_442_811_72),
    (1, 1, 0.873_281_936_020_439),
    (3, 1, -0.436_653_048_526_683),
    (5, 1, 0.286_596_714_529_479),
    (6, 1, -0.131_778_331_276_228),
    (8, 1, 6.766_820_643_302_75e-3),
];

const V_PH_3A: [Term; 32] = [
    (-12, 6, 5.299_440_629_660_28e-3),
    (-12, 8, -0.170_099_690_234_461),
    (-12, 12, 11.132_381_431_292_7),
    (-12, 18, -2_178.981_231_451_25),
    (-10, 4, -5.060_618_279_808_75e-4),
    (-10, 7, 0.556_495_239_685_324),
    (-10, 10, -9.436_727_260_940_16),
    (-8, 5, -0.297_856_807_561_527),
    (-8, 12, 93.935_394_371_718_6),
    (-6, 3, 1.929_449_394_659_81e-2),
    (-6, 4, 0.421_740_664_704_763),
    (-6, 22, -3_689_141.262_823_3),
    (-4, 2, -7.375_668_476_006_39e-3),
    (-4, 3, -0.354_753_242_424_366),
    (-3, 7, -1.997_681_693_387_27),
    (-2, 3, 1.154_562_970_590_49),
    (-2, 16, 5_683.668_758_159_6),
    (-1, 0, 8.081_695_401_246_68e-3),
    (-1, 1, 0.172_416_341_519_307),
    (-1, 2, 1.042_701_752_929_27),
    (-1, 3, -0.297_691_372_792_847),
    (0, 0, 0.560_394_465_163_593),
    (0, 1, 0.275_234_661_176_914),
    (1, 0, -0.148_347_894_866_012),
    (1, 1, -6.511_425_134_785_15e-2),
    (1, 2, -2.924_687_153_863_02),
    (2, 0, 6.648_760_969_526_65e-2),
    (2, 2, 3.523_350_142_638_44),
    (3, 0, -1.463_407_923_133_32e-2),
    (4, 2, -2.245_034_866_681_84),
    (5, 2, 1.105_334_647_061_42),
    (8, 2, -4.087_573_444_956_12e-2),
];

const V_PH_3B: [Term; 30] = [
    (-12, 0, -2.251_969_343_363_18e-9),
    (-12, 1, 1.406_743_633_134_86e-8),
    (-8, 0, 2.337_840_852_805_6e-6),
    (-8, 1, -3.318_337_152_290_01e-5),
    (-8, 3, 1.079_567_785_143_18e-3),
    (-8, 6, -0.271_382_067_378_863),
    (-8, 7, 1.072_022_624_903_33),
    (-8, 8, -0.853_821_329_075_382),
    (-6, 0, -2.152_141_943_405_26e-5),
    (-6, 1, 7.696_560_882_227_3e-4),
    (-6, 2, -4.311_365_804_338_64e-3),
    (-6, 5, 0.453_342_167_309_331),
    (-6, 6, -0.507_749_535_873_652),
    (-6, 10, -100.475_154_528_389),
    (-4, 3, -0.219_201_924_648_793),
    (-4, 6, -3.210_879_656_689_17),
    (-4, 10, 607.567_815_637_771),
    (-3, 0, 5.576_864_506_859_32e-4),
    (-3, 2, 0.187_499_040_029_55),
    (-2, 1, 9.053_680_304_481_07e-3),
    (-2, 2, 0.285_417_173_048_685),
    (-1, 0, 3.299_240_309_960_98e-2),
    (-1, 1, 0.239_897_419_685_483),
    (-1, 4, 4.827_549_959_513_94),
    (-1, 5, -11.803_575_370_223_1),
    (0, 0, 0.169_490_044_091_791),
    (1, 0, -1.799_672_225_077_87e-2),
    (1, 1, 3.718_101_163_326_74e-2),
    (2, 2, -5.362_883_350_650_96e-2),
    (2, 6, 1.606_971_010_925_2),
];

const T_PS_3A: [Term; 33] = [
    (-12, 28, 1_500_420_082.638_75),
    (-12, 32, -159_397_258_480.424),
    (-10, 4, 5.021_811_402_179_75e-4),
    (-10, 10, -67.205_776_785_546_6),
    (-10, 12, 1_450.585_454_044_56),
    (-10, 14, -8_238.895_348_888_9),
    (-8, 5, -0.154_852_214_233_853),
    (-8, 7, 11.230_504_674_669_5),
    (-8, 8, -29.700_021_348_282_2),
    (-8, 28, 43_856_513_263.549_5),
    (-6, 2, 1.378_378_386_354_64e-3),
    (-6, 6, -2.974_785_271_574_62),
    (-6, 32, 9_717_779_473_494.13),
    (-5, 0, -5.715_277_670_523_98e-5),
    (-5, 14, 28_830.794_977_842),
    (-5, 32, -74_442_828_926_270.3),
    (-4, 6, 12.801_732_484_892_1),
    (-4, 10, -368.275_545_889_071),
    (-4, 36, 6.647_689_047_791_77e15),
    (-2, 1, 0.044_935_925_195_888),
    (-2, 4, -4.228_978_360_996_55),
    (-1, 1, -0.240_614_376_434_179),
    (-1, 6, -4.743_413_652_549_24),
    (0, 0, 0.724_093_999_126_11),
    (0, 1, 0.923_874_349_695_897),
    (0, 4, 3.990_436_552_810_15),
    (1, 0, 3.840_666_518_680_09e-2),
    (2, 0, -3.593_443_655_718_48e-3),
    (2, 3, -0.735_196_448_821_653),
    (3, 2, 0.188_367_048_396_131),
    (8, 0, 1.410_642_668_187_04e-4),
    (8, 1, -2.574_185_014_963_37e-3),
    (10, 2, 1.232_200_248_515_55e-3),
];

const T_PS_3B: [Term; 28] = [
    (-12, 1, 0.527_111_701_601_66),
    (-12, 3, -40.131_783_005_274_2),
    (-12, 4, 153.020_073_134_484),
    (-12, 7, -2_247.993_982_188_27),
    (-8, 0, -0.193_993_484_669_048),
    (-8, 1, -1.404_675_578_937_68),
    (-8, 3, 42.679_987_811_402_4),
    (-6, 0, 0.752_810_643_416_743),
    (-6, 2, 22.665_723_861_641_7),
    (-6, 4, -622.873_556_909_932),
    (-5, 0, -0.660_823_667_935_396),
    (-5, 1, 0.841_267_087_271_658),
    (-5, 2, -25.371_750_176_439_7),
    (-5, 4, 485.708_963_532_948),
    (-5, 6, 880.531_517_490_555),
    (-4, 12, 2_650_155.927_946_26),
    (-3, 1, -0.359_287_150_025_783),
    (-3, 6, -656.991_567_673_753),
    (-2, 2, 2.417_681_491_853_67),
    (0, 0, 0.856_873_461_222_588),
    (2, 1, 0.655_143_675_313_458),
    (3, 1, -0.213_535_213_206_406),
    (4, 0, 5.629_749_576_063_48e-3),
    (5, 24, -316_955_725_450_471.0),
    (6, 0, -6.999_970_001_524_57e-4),
    (8, 3, 1.198_458_032_107_67e-2),
    (12, 1, 1.938_481_220_220_95e-5),
    (14, 2, -2.150_957_491_823_09e-5),
];

const V_PS_3A: [Term; 28] = [
    (-12, 10, 79.554_407_409_397_5),
    (-12, 12, -2_382.612_429_845_9),
    (-12, 14, 17_681.310_061_778_7),
    (-10, 4, -1.105_247_270_803_79e-3),
    (-10, 8, -15.321_383_365_532_6),
    (-10, 10, 297.544_599_376_982),
    (-10, 20, -35_031_520.687_124_2),
    (-8, 5, 0.277_513_761_062_119),
    (-8, 6, -0.523_964_271_036_888),
    (-8, 14, -148_011.182_995_403),
    (-8, 16, 1_600_148.993_742_66),
    (-6, 28, 1_708_023_226_634.27),
    (-5, 1, 2.468_669_960_064_94e-4),
    (-4, 5, 1.653_260_847_979_8),
    (-3, 2, -0.118_008_384_666_987),
    (-3, 4, 2.537_986_423_559),
    (-2, 3, 0.965_127_704_669_424),
    (-2, 8, -28.217_242_053_282_6),
    (-1, 1, 0.203_224_612_353_823),
    (-1, 2, 1.106_481_860_635_13),
    (0, 0, 0.526_127_948_451_28),
    (0, 1, 0.277_000_018_736_321),
    (0, 3, 1.081_533_405_011_32),
    (1, 0, -7.441_278_853_578_93e-2),
    (2, 0, 1.640_944_435_413_84e-2),
    (4, 2, -6.804_682_753_010_65e-2),
    (5, 2, 0.025_798_857_610_164),
    (6, 0, -1.457_498_619_444_16e-4),
];

const V_PS_3B: [Term; 31] = [
    (-12, 0, 5.915_997_803_222_38e-5),
    (-12, 1, -1.854_659_971_378_56e-3),
    (-12, 2, 1.041_905_104_800_13e-2),
    (-12, 3, 5.986_473_020_385_9e-3),
    (-12, 5, -0.771_391_189_901_699),
    (-12, 6, 1.725_497_655_570_36),
    (-10, 0, -4.670_760_798_465_26e-4),
    (-10, 1, 1.345_338_233_844_39e-2),
    (-10, 2, -8.080_943_368_054_95e-2),
    (-10, 4, 0.508_139_374_365_767),
    (-8, 0, 1.285_846_433_616_83e-3),
    (-5, 1, -1.638_993_539_154_35),
    (-5, 2, 5.869_381_993_180_63),
    (-5, 3, -2.924_666_679_186_13),
    (-4, 0, -6.140_763_014_995_37e-3),
    (-4, 1, 5.761_990_140_491_72),
    (-4, 2, -12.161_332_060_678_8),
    (-4, 3, 1.676_375_409_579_44),
    (-3, 1, -7.441_358_387_734_63),
    (-2, 0, 3.781_680_914_376_59e-2),
    (-2, 1, 4.014_322_030_276_88),
    (-2, 2, 16.027_983_747_918_5),
    (-2, 3, 3.178_487_793_477_28),
    (-2, 4, -3.583_623_103_048_53),
    (-2, 12, -1_159_952.604_468_27),
    (0, 0, 0.199_256_573_577_909),
    (0, 1, -0.122_270_624_794_624),
    (0, 2, -19.144_914_371_658_6),
    (1, 0, -1.504_480_029_052_84e-2),
    (1, 2, 14.640_790_016_215_4),
    (2, 2, -3.274_777_871_882_3),
];

const P_HS_3A: [Term; 33] = [
    (0, 0, 7.708_898_283_269_34),
    (0, 1, -26.083_500_912_868_8),
    (0, 5, 267.416_218_930_389),
    (1, 0, 17.222_108_949_684_4),
    (1, 3, -293.542_332_145_97),
    (1, 4, 614.135_601_882_478),
    (1, 8, -61_056.275_772_567_4),
    (1, 14, -65_127_225.111_821_9),
    (2, 6, 73_591.931_352_193_7),
    (2, 16, -11_664_650_591.419_1),
    (3, 0, 35.526_708_643_446_1),
    (3, 2, -596.144_543_825_955),
    (3, 3, -475.842_430_145_708),
    (4, 0, 69.678_196_535_950_3),
    (4, 1, 335.674_250_377_312),
    (4, 4, 25_052.680_913_088_2),
    (4, 5, 146_997.380_630_766),
    (5, 28, 5.380_693_150_915_34e19),
    (6, 28, 1.436_198_272_913_46e21),
    (7, 24, 3.649_858_661_659_94e19),
    (8, 1, -2_547.415_611_567_75),
    (10, 32, 2.401_201_970_965_63e27),
    (10, 36, -3.938_474_646_794_96e29),
    (14, 22, 1.470_734_070_248_52e24),
    (18, 28, -4.263_912_504_320_59e31),
    (20, 36, 1.945_093_406_210_77e38),
    (22, 16, 6.662_121_321_148_96e23),
    (22, 28, 7.067_770_165_528_58e33),
    (24, 36, 1.755_636_219_755_76e41),
    (28, 16, 1.084_086_074_291_24e28),
    (28, 36, 7.308_727_051_751_51e43),
    (32, 10, 1.591_458_473_988_7e24),
    (32, 28, 3.771_216_059_433_24e40),
];

const P_HS_3B: [Term; 35] = [
    (-12, 2, 1.252_443_607_179_79e-13),
    (-12, 10, -1.265_993_225_537_13e-2),
    (-12, 12, 5.068_780_301_406_26),
    (-12, 14, 31.784_717_115_420_2),
    (-12, 20, -391_041.161_399_932),
    (-10, 2, -9.757_334_063_920_44e-11),
    (-10, 10, -18.631_241_948_827_9),
    (-10, 14, 510.973_543_414_101),
    (-10, 18, 373_847.005_822_362),
    (-8, 2, 2.998_040_246_665_72e-8),
    (-8, 8, 20.054_439_382_034_2),
    (-6, 2, -4.980_304_876_628_29e-6),
    (-6, 6, -10.230_180_636_003),
    (-6, 7, 55.281_912_699_032_5),
    (-6, 8, -206.211_367_510_878),
    (-5, 10, -7_940.122_323_248_23),
    (-4, 4, 7.822_484_720_281_53),
    (-4, 5, -58.654_432_690_246_8),
    (-4, 8, 3_550.736_476_964_81),
    (-3, 1, -1.153_031_072_901_62e-4),
    (-3, 3, -1.750_924_031_718_02),
    (-3, 5, 257.981_687_748_16),
    (-3, 6, -727.048_374_179_467),
    (-2, 0, 1.216_448_226_091_98e-4),
    (-2, 1, 3.931_378_717_626_92e-2),
    (-1, 0, 7.041_810_059_092_96e-3),
    (0, 3, -82.910_820_069_811),
    (2, 0, -0.265_178_818_131_25),
    (2, 1, 13.753_168_245_399_1),
    (5, 0, -52.239_409_075_304_6),
    (6, 1, 2_405.562_989_410_48),
    (8, 1, -22_736.163_126_892_9),
    (10, 1, 89_074.634_393_256_7),
    (14, 3, -23_923_456.582_248_6),
    (14, 7, 5_687_958_081.297_14),
];

/// Dimensionless Helmholtz free energy and its first derivatives.
struct Helmholtz {
    delta: f64,
    tau: f64,
    phi: f64,
    phi_delta: f64,
    phi_tau: f64,
}

fn helmholtz(rho: f64, t: f64) -> Helmholtz {
    let delta = rho / RHO_CRIT;
    let tau = T_CRIT / t;

    let mut phi = N1 * delta.ln();
    let mut phi_delta = N1 / delta;
    let mut phi_tau = 0.0;
    for &(i, j, n) in &HELMHOLTZ {
        phi += n * delta.powi(i) * tau.powi(j);
        phi_delta += n * f64::from(i) * delta.powi(i - 1) * tau.powi(j);
        phi_tau += n * delta.powi(i) * f64::from(j) * tau.powi(j - 1);
    }

    Helmholtz {
        delta,
        tau,
        phi,
        phi_delta,
        phi_tau,
    }
}

pub(crate) fn p_rho_t(rho: f64, t: f64) -> f64 {
    let f = helmholtz(rho, t);
    rho * R * t * f.delta * f.phi_delta / 1000.0
}

pub(crate) fn u_rho_t(rho: f64, t: f64) -> f64 {
    let f = helmholtz(rho, t);
    R * t * f.tau * f.phi_tau
}

pub(crate) fn h_rho_t(rho: f64, t: f64) -> f64 {
    let f = helmholtz(rho, t);
    R * t * (f.tau * f.phi_tau + f.delta * f.phi_delta)
}

pub(crate) fn s_rho_t(rho: f64, t: f64) -> f64 {
    let f = helmholtz(rho, t);
    R * (f.tau * f.phi_tau - f.phi)
}

fn is_3a_ph(p: f64, h: f64) -> bool {
    h < boundary::b3ab_h(p)
}

/// Backward temperature from pressure and enthalpy.
pub(crate) fn t_ph(p: f64, h: f64) -> f64 {
    let pi = p / 100.0;
    if is_3a_ph(p, h) {
        760.0 * polynomial(&T_PH_3A, pi + 0.240, h / 2300.0 - 0.615)
    } else {
        860.0 * polynomial(&T_PH_3B, pi + 0.298, h / 2800.0 - 0.720)
    }
}

/// Backward specific volume from pressure and enthalpy.
pub(crate) fn v_ph(p: f64, h: f64) -> f64 {
    let pi = p / 100.0;
    if is_3a_ph(p, h) {
        0.0028 * polynomial(&V_PH_3A, pi + 0.128, h / 2100.0 - 0.727)
    } else {
        0.0088 * polynomial(&V_PH_3B, pi + 0.0661, h / 2800.0 - 0.720)
    }
}

/// Backward temperature from pressure and entropy.
pub(crate) fn t_ps(p: f64, s: f64) -> f64 {
    let pi = p / 100.0;
    if s <= S_CRIT {
        760.0 * polynomial(&T_PS_3A, pi + 0.240, s / 4.4 - 0.703)
    } else {
        860.0 * polynomial(&T_PS_3B, pi + 0.760, s / 5.3 - 0.818)
    }
}

/// Backward specific volume from pressure and entropy.
pub(crate) fn v_ps(p: f64, s: f64) -> f64 {
    let pi = p / 100.0;
    if s <= S_CRIT {
        0.0028 * polynomial(&V_PS_3A, pi + 0.187, s / 4.4 - 0.755)
    } else {
        0.0088 * polynomial(&V_PS_3B, pi + 0.298, s / 5.3 - 0.816)
    }
}

/// Backward pressure from enthalpy and entropy.
pub(crate) fn p_hs(h: f64, s: f64) -> f64 {
    if s <= S_CRIT {
        99.0 * polynomial(&P_HS_3A, h / 2300.0 - 1.01, s / 4.4 - 0.750)
    } else {
        16.6 / polynomial(&P_HS_3B, h / 2800.0 - 0.681, s / 5.3 - 0.792)
    }
}
