//! The fixed matrices behind the color space conversions.
//!
//! The RGB matrices derive from each space's primaries and white point. The
//! LMS matrices combine those with Oklab's first matrix, which maps XYZ D65 to
//! the cone responses, so that a linear RGB space converts to LMS in a single
//! multiplication. The Oklab matrices use the single-precision values from
//! [Björn Ottosson's reference](https://bottosson.github.io/posts/oklab/),
//! with the inverse recomputed at full precision.

use crate::Matrix;

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const OKLAB_TO_LMS: Matrix = [
    [  1.0,  0.3963377773761749,   0.21580375730991364 ],
    [  1.0, -0.10556134581565857, -0.0638541728258133  ],
    [  1.0, -0.08948417752981186, -1.2914855480194092  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LMS_TO_OKLAB: Matrix = [
    [  0.21045426830931402,   0.7936177747023052, -0.004072043011619259 ],
    [  1.9779985324311686,   -2.4285922420485795,  0.450593709617411    ],
    [  0.025904042465547773,  0.7827717124575297, -0.8086757549230775   ],
];

// --------------------------------------------------------------------------------------------------------------------

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const XYZ_TO_LMS: Matrix = [
    [  0.819022437996703,    0.3619062600528904, -0.12887378152098788 ],
    [  0.03298365393238847,  0.9292868615863433,  0.03614466635064236 ],
    [  0.0481771893596242,   0.2642395317527308,  0.6335478284694308  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LMS_TO_XYZ: Matrix = [
    [  1.2268798758459243,  -0.5578149944602171,   0.2813910456659646  ],
    [ -0.04057574521480084,  1.1122868032803173,  -0.07171105806551635 ],
    [ -0.07637293667466007, -0.42149333240224324,  1.5869240198367818  ],
];

// --------------------------------------------------------------------------------------------------------------------

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const D65_TO_D50: Matrix = [
    [  1.0479297925449969,    0.022946870601609652, -0.05019226628920524  ],
    [  0.02962780877005599,   0.9904344267538799,   -0.017073799063418826 ],
    [ -0.009243040646204504,  0.015055191490298152,  0.7518742814281371   ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const D50_TO_D65: Matrix = [
    [  0.955473421488075,    -0.02309845494876471,   0.06325924320057072  ],
    [ -0.0283697093338637,    1.0099953980813041,    0.021041441191917323 ],
    [  0.012314014864481998, -0.020507649298898964,  1.330365926242124    ],
];

// --------------------------------------------------------------------------------------------------------------------
// Linear sRGB

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LINEAR_SRGB_TO_XYZ: Matrix = [
    [  0.4123907992659595,   0.35758433938387796,  0.1804807884018343  ],
    [  0.21263900587151036,  0.7151686787677559,   0.07219231536073371 ],
    [  0.01933081871559185,  0.11919477979462599,  0.9505321522496606  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const XYZ_TO_LINEAR_SRGB: Matrix = [
    [  3.2409699419045213,  -1.5373831775700935,  -0.4986107602930033  ],
    [ -0.9692436362808798,   1.8759675015077206,   0.04155505740717561 ],
    [  0.05563007969699361, -0.20397695888897657,  1.0569715142428786  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LINEAR_SRGB_TO_LMS: Matrix = [
    [  0.412221469470763,    0.5363325372617348,  0.05144599326750221 ],
    [  0.21190349581782522,  0.6806995506452342,  0.1073969535369405  ],
    [  0.08830245919005643,  0.2817188391361215,  0.6299787016738221  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LMS_TO_LINEAR_SRGB: Matrix = [
    [  4.076741636075958,     -3.307711539258062,   0.23096990318210417 ],
    [ -1.268437973285032,      2.609757349287689,  -0.3413193760026571  ],
    [ -0.0041960761386755155, -0.7034186179359364,  1.707614694074612   ],
];

// --------------------------------------------------------------------------------------------------------------------
// Linear Display P3

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LINEAR_DISPLAY_P3_TO_XYZ: Matrix = [
    [  0.48657094864821626,  0.26566769316909294,   0.1982172852343625 ],
    [  0.22897456406974884,  0.6917385218365062,    0.079286914093745  ],
    [  0.0,                  0.045113381858902575,  1.0439443689009757 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const XYZ_TO_LINEAR_DISPLAY_P3: Matrix = [
    [  2.4934969119414245,   -0.9313836179191236,  -0.40271078445071684 ],
    [ -0.829488969561575,     1.7626640603183468,   0.02362468584194359 ],
    [  0.035845830243784335, -0.07617238926804171,  0.9568845240076873  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LINEAR_DISPLAY_P3_TO_LMS: Matrix = [
    [  0.48137985274995443,  0.46211837101131803,  0.05650177623872757 ],
    [  0.22883194181124472,  0.6532168193835676,   0.11795123880518774 ],
    [  0.08394575232299319,  0.22416527097756642,  0.6918889766994404  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LMS_TO_LINEAR_DISPLAY_P3: Matrix = [
    [  3.1277689713618737,   -2.2571357625916386,  0.12936679122976494 ],
    [ -1.0910090184377979,    2.4133317103069225, -0.32232269186912466 ],
    [ -0.026010801938570454, -0.508041331704167,   1.5340521336427375  ],
];

// --------------------------------------------------------------------------------------------------------------------
// Linear Rec. 2020

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LINEAR_REC2020_TO_XYZ: Matrix = [
    [  0.6369580483012913,   0.14461690358620838,   0.16888097516417205  ],
    [  0.26270021201126703,  0.677998071518871,     0.059301716469861945 ],
    [  0.0,                  0.028072693049087508,  1.0609850577107909   ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const XYZ_TO_LINEAR_REC2020: Matrix = [
    [  1.7166511879712676,   -0.3556707837763924,   -0.2533662813736598  ],
    [ -0.666684351832489,     1.616481236634939,     0.01576854581391113 ],
    [  0.017639857445310915, -0.042770613257808655,  0.942103121235474   ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LINEAR_REC2020_TO_LMS: Matrix = [
    [  0.6167557848654444,   0.36019840122646335,  0.023045813908092287 ],
    [  0.2651330593926367,   0.6358393720678491,   0.09902756853951408  ],
    [  0.10010262952034828,  0.20390652261661452,  0.6959908478630372   ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LMS_TO_LINEAR_REC2020: Matrix = [
    [  2.1399067304346513,   -1.246389493760618,   0.10648276332596669 ],
    [ -0.8847358357577674,    2.1632309383612007, -0.2784951026034334  ],
    [ -0.048573746400443964, -0.4545031497140964,  1.5030768961145404  ],
];

// --------------------------------------------------------------------------------------------------------------------
// Linear A98 RGB

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LINEAR_A98_RGB_TO_XYZ: Matrix = [
    [  0.5766690429101308,    0.18555823790654627,  0.18822864623499472 ],
    [  0.29734497525053616,   0.627363566255466,    0.07529145849399789 ],
    [  0.027031361386412378,  0.07068885253582714,  0.9913375368376389  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const XYZ_TO_LINEAR_A98_RGB: Matrix = [
    [  2.041587903810746,    -0.5650069742788596,  -0.3447313507783295  ],
    [ -0.9692436362808798,    1.8759675015077206,   0.04155505740717561 ],
    [  0.013444280632031024, -0.11836239223101824,  1.0151749943912054  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LINEAR_A98_RGB_TO_LMS: Matrix = [
    [  0.5764322596183941,   0.36991322261987963,  0.053654517761726354 ],
    [  0.29631647054222465,  0.5916761332521885,   0.11200739620558686  ],
    [  0.12347825101427762,  0.21949869837199862,  0.6570230506137238   ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LMS_TO_LINEAR_A98_RGB: Matrix = [
    [  2.5540368386115566,  -1.6219761806828699,  0.06793934207131329 ],
    [ -1.268437973285032,    2.609757349287689,  -0.3413193760026571  ],
    [ -0.05623473593749381, -0.5670418395669061,  1.6232765755043999  ],
];

// --------------------------------------------------------------------------------------------------------------------
// Linear ProPhoto RGB, relative to D50

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LINEAR_PROPHOTO_RGB_TO_XYZ_D50: Matrix = [
    [  0.7977604896723025,   0.13518583717574034,  0.031349349581524806  ],
    [  0.28807112822929337,  0.7118432178101014,   8.565396060525903e-05 ],
    [  0.0,                  0.0,                  0.8251046025104602    ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const XYZ_D50_TO_LINEAR_PROPHOTO_RGB: Matrix = [
    [  1.3457989731028284, -0.2555801000799755, -0.05110628506753402  ],
    [ -0.5446224939028348,  1.5082327413132783,  0.020536032391479733 ],
    [  0.0,                 0.0,                 1.2119675456389452   ],
];
