//! Region 1: compressed liquid.

use super::{Gibbs, Term, polynomial};

/// Reducing pressure in MPa.
const P_STAR: f64 = 16.53;

/// Reducing temperature in K.
const T_STAR: f64 = 1386.0;

const GIBBS: [Term; 34] = [
    (0, -2, 0.146_329_712_131_67),
    (0, -1, -0.845_481_871_691_14),
    (0, 0, -3.756_360_367_204),
    (0, 1, 3.385_516_916_838_5),
    (0, 2, -0.957_919_633_878_72),
    (0, 3, 0.157_720_385_132_28),
    (0, 4, -0.016_616_417_199_501),
    (0, 5, 8.121_462_998_356_8e-4),
    (1, -9, 2.831_908_012_380_4e-4),
    (1, -7, -6.070_630_156_587_4e-4),
    (1, -1, -0.018_990_068_218_419),
    (1, 0, -0.032_529_748_770_505),
    (1, 1, -0.021_841_717_175_414),
    (1, 3, -5.283_835_796_993e-5),
    (2, -3, -4.718_432_107_326_7e-4),
    (2, 0, -3.000_178_079_302_6e-4),
    (2, 1, 4.766_139_390_698_7e-5),
    (2, 3, -4.414_184_533_084_6e-6),
    (2, 17, -7.269_499_629_759_4e-16),
    (3, -4, -3.167_964_484_505_4e-5),
    (3, 0, -2.827_079_798_531_2e-6),
    (3, 6, -8.520_512_812_010_3e-10),
    (4, -5, -2.242_528_190_8e-6),
    (4, -2, -6.517_122_289_560_1e-7),
    (4, 10, -1.434_172_993_792_4e-13),
    (5, -8, -4.051_699_686_011_7e-7),
    (8, -11, -1.273_430_174_164_1e-9),
    (8, -6, -1.742_487_123_063_4e-10),
    (21, -29, -6.876_213_129_553_1e-19),
    (23, -31, 1.447_830_782_852_1e-20),
    (29, -38, 2.633_578_166_279_5e-23),
    (30, -39, -1.194_762_264_007_1e-23),
    (31, -40, 1.822_809_458_140_4e-24),
    (32, -41, -9.353_708_729_245_8e-26),
];

const T_PH: [Term; 20] = [
    (0, 0, -238.724_899_245_21),
    (0, 1, 404.211_886_379_45),
    (0, 2, 113.497_468_817_18),
    (0, 6, -5.845_761_604_803_9),
    (0, 22, -1.528_548_241_314e-4),
    (0, 32, -1.086_670_769_537_7e-6),
    (1, 0, -13.391_744_872_602),
    (1, 1, 43.211_039_183_559),
    (1, 2, -54.010_067_170_506),
    (1, 3, 30.535_892_203_916),
    (1, 4, -6.596_474_942_363_8),
    (1, 10, 9.396_540_087_836_3e-3),
    (1, 32, 1.157_364_750_534e-7),
    (2, 10, -2.585_864_128_207_3e-5),
    (2, 32, -4.064_436_308_479_9e-9),
    (3, 10, 6.645_618_619_163_5e-8),
    (3, 32, 8.067_073_410_302_7e-11),
    (4, 32, -9.347_777_121_394_7e-13),
    (5, 32, 5.826_544_202_060_1e-15),
    (6, 32, -1.502_018_595_350_3e-17),
];

const T_PS: [Term; 20] = [
    (0, 0, 174.782_680_583_07),
    (0, 1, 34.806_930_892_873),
    (0, 2, 6.529_258_497_845_5),
    (0, 3, 0.330_399_817_754_89),
    (0, 11, -1.928_138_292_319_6e-7),
    (0, 31, -2.490_919_724_457_3e-23),
    (1, 0, -0.261_076_364_893_32),
    (1, 1, 0.225_929_659_815_86),
    (1, 2, -0.064_256_463_395_226),
    (1, 3, 7.887_628_927_052_6e-3),
    (1, 12, 3.567_211_060_736_6e-10),
    (1, 31, 1.733_249_699_489_5e-24),
    (2, 0, 5.660_890_065_483_7e-4),
    (2, 1, -3.263_548_313_971_7e-4),
    (2, 2, 4.477_828_669_063_2e-5),
    (2, 9, -5.132_215_690_850_7e-10),
    (2, 31, -4.252_265_704_220_7e-26),
    (3, 10, 2.640_044_136_068_9e-13),
    (3, 32, 7.812_460_045_972_3e-29),
    (4, 32, -3.073_219_990_366_8e-31),
];

const P_HS: [Term; 19] = [
    (0, 0, -0.691_997_014_660_582),
    (0, 1, -18.361_254_878_756),
    (0, 2, -9.283_324_092_973_35),
    (0, 4, 65.963_956_990_990_6),
    (0, 5, -16.206_038_891_202_4),
    (0, 6, 450.620_017_338_667),
    (0, 8, 854.680_678_224_17),
    (0, 14, 6_075.232_140_011_62),
    (1, 0, 32.648_768_262_185_6),
    (1, 1, -26.940_884_458_293_1),
    (1, 4, -319.947_848_334_3),
    (1, 6, -928.354_307_043_32),
    (2, 0, 30.363_453_745_524_9),
    (2, 1, -65.054_042_244_414_6),
    (2, 10, -4_309.913_165_161_3),
    (3, 4, -747.512_324_096_068),
    (4, 1, 730.000_345_529_245),
    (4, 4, 1_142.840_325_690_21),
    (5, 0, -436.407_041_874_559),
];

fn gibbs(p: f64, t: f64) -> Gibbs {
    let pi = p / P_STAR;
    let tau = T_STAR / t;
    let x = 7.1 - pi;
    let y = tau - 1.222;

    let mut gamma = 0.0;
    let mut gamma_pi = 0.0;
    let mut gamma_tau = 0.0;
    for &(i, j, n) in &GIBBS {
        let fi = f64::from(i);
        let fj = f64::from(j);
        gamma += n * x.powi(i) * y.powi(j);
        gamma_pi -= n * fi * x.powi(i - 1) * y.powi(j);
        gamma_tau += n * x.powi(i) * fj * y.powi(j - 1);
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
    polynomial(&T_PH, p, h / 2500.0 + 1.0)
}

/// Backward temperature from pressure and entropy.
pub(crate) fn t_ps(p: f64, s: f64) -> f64 {
    polynomial(&T_PS, p, s + 2.0)
}

/// Backward pressure from enthalpy and entropy.
pub(crate) fn p_hs(h: f64, s: f64) -> f64 {
    100.0 * polynomial(&P_HS, h / 3400.0 + 0.05, s / 7.6 + 0.05)
}
