//! Named character reference table and lookup.
//!
//! Static data keyed on the standard's entity names: the full 2,231-entry
//! named character references table, generated from the standard's
//! `entities.json`. Names keep their trailing `;` where the standard has
//! one; the legacy semicolon-less forms (the historical HTML 4 set) are
//! separate entries. Each name maps to one or two Unicode scalar values.
//!
//! Lookup contract:
//! - `longest_match` consumes the longest table entry that prefixes the
//!   remaining input. A name is ASCII alphanumerics with an optional final
//!   `;`, so the only candidates are prefixes of the leading alphanumeric run
//!   (plus that run extended by one `;`).
//! - The in-attribute historical exception is the caller's job (the tokenizer
//!   sees the character after the match; this module only matches).

use std::sync::OnceLock;

/// One named reference. `chars[1]` is `'\0'` for single-scalar entries
/// (U+0000 is never a mapped value).
#[derive(Clone, Copy, Debug)]
pub(crate) struct NamedRef {
    pub(crate) name: &'static str,
    pub(crate) chars: [char; 2],
}

impl NamedRef {
    pub(crate) fn ends_with_semicolon(&self) -> bool {
        self.name.ends_with(';')
    }

    pub(crate) fn scalars(&self) -> impl Iterator<Item = char> {
        self.chars.into_iter().filter(|&c| c != '\0')
    }
}

/// Longest table name length, bounding the lookahead scan.
pub(crate) const MAX_NAME_LEN: usize = 32;

macro_rules! e {
    ($name:literal, $a:literal) => {
        NamedRef {
            name: $name,
            chars: [$a, '\0'],
        }
    };
    ($name:literal, $a:literal, $b:literal) => {
        NamedRef {
            name: $name,
            chars: [$a, $b],
        }
    };
}

/// Match the longest entity name prefixing `rest`.
pub(crate) fn longest_match(rest: &str) -> Option<&'static NamedRef> {
    let bytes = rest.as_bytes();
    let mut run = 0;
    while run < bytes.len() && run < MAX_NAME_LEN && bytes[run].is_ascii_alphanumeric() {
        run += 1;
    }
    if run == 0 {
        return None;
    }
    if bytes.get(run) == Some(&b';')
        && let Some(hit) = lookup(&rest[..run + 1])
    {
        return Some(hit);
    }
    for len in (1..=run).rev() {
        if let Some(hit) = lookup(&rest[..len]) {
            return Some(hit);
        }
    }
    None
}

/// Exact-name lookup via binary search over the sorted index.
pub(crate) fn lookup(name: &str) -> Option<&'static NamedRef> {
    let index = sorted_index();
    index
        .binary_search_by(|&i| ENTITIES[i as usize].name.cmp(name))
        .ok()
        .map(|pos| &ENTITIES[index[pos] as usize])
}

// The generated table is already name-sorted, but lookups still go through
// the built index so edits to the data stay purely additive.
fn sorted_index() -> &'static [u16] {
    static INDEX: OnceLock<Vec<u16>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut index: Vec<u16> = (0..ENTITIES.len() as u16).collect();
        index.sort_by_key(|&i| ENTITIES[i as usize].name);
        #[cfg(debug_assertions)]
        for pair in index.windows(2) {
            debug_assert_ne!(
                ENTITIES[pair[0] as usize].name,
                ENTITIES[pair[1] as usize].name,
                "duplicate entity name"
            );
        }
        index
    })
}

// Generated from the standard's entities.json; do not edit by hand.
#[rustfmt::skip]
static ENTITIES: &[NamedRef] = &[
    e!("AElig", '\u{C6}'),
    e!("AElig;", '\u{C6}'),
    e!("AMP", '\u{26}'),
    e!("AMP;", '\u{26}'),
    e!("Aacute", '\u{C1}'),
    e!("Aacute;", '\u{C1}'),
    e!("Abreve;", '\u{102}'),
    e!("Acirc", '\u{C2}'),
    e!("Acirc;", '\u{C2}'),
    e!("Acy;", '\u{410}'),
    e!("Afr;", '\u{1D504}'),
    e!("Agrave", '\u{C0}'),
    e!("Agrave;", '\u{C0}'),
    e!("Alpha;", '\u{391}'),
    e!("Amacr;", '\u{100}'),
    e!("And;", '\u{2A53}'),
    e!("Aogon;", '\u{104}'),
    e!("Aopf;", '\u{1D538}'),
    e!("ApplyFunction;", '\u{2061}'),
    e!("Aring", '\u{C5}'),
    e!("Aring;", '\u{C5}'),
    e!("Ascr;", '\u{1D49C}'),
    e!("Assign;", '\u{2254}'),
    e!("Atilde", '\u{C3}'),
    e!("Atilde;", '\u{C3}'),
    e!("Auml", '\u{C4}'),
    e!("Auml;", '\u{C4}'),
    e!("Backslash;", '\u{2216}'),
    e!("Barv;", '\u{2AE7}'),
    e!("Barwed;", '\u{2306}'),
    e!("Bcy;", '\u{411}'),
    e!("Because;", '\u{2235}'),
    e!("Bernoullis;", '\u{212C}'),
    e!("Beta;", '\u{392}'),
    e!("Bfr;", '\u{1D505}'),
    e!("Bopf;", '\u{1D539}'),
    e!("Breve;", '\u{2D8}'),
    e!("Bscr;", '\u{212C}'),
    e!("Bumpeq;", '\u{224E}'),
    e!("CHcy;", '\u{427}'),
    e!("COPY", '\u{A9}'),
    e!("COPY;", '\u{A9}'),
    e!("Cacute;", '\u{106}'),
    e!("Cap;", '\u{22D2}'),
    e!("CapitalDifferentialD;", '\u{2145}'),
    e!("Cayleys;", '\u{212D}'),
    e!("Ccaron;", '\u{10C}'),
    e!("Ccedil", '\u{C7}'),
    e!("Ccedil;", '\u{C7}'),
    e!("Ccirc;", '\u{108}'),
    e!("Cconint;", '\u{2230}'),
    e!("Cdot;", '\u{10A}'),
    e!("Cedilla;", '\u{B8}'),
    e!("CenterDot;", '\u{B7}'),
    e!("Cfr;", '\u{212D}'),
    e!("Chi;", '\u{3A7}'),
    e!("CircleDot;", '\u{2299}'),
    e!("CircleMinus;", '\u{2296}'),
    e!("CirclePlus;", '\u{2295}'),
    e!("CircleTimes;", '\u{2297}'),
    e!("ClockwiseContourIntegral;", '\u{2232}'),
    e!("CloseCurlyDoubleQuote;", '\u{201D}'),
    e!("CloseCurlyQuote;", '\u{2019}'),
    e!("Colon;", '\u{2237}'),
    e!("Colone;", '\u{2A74}'),
    e!("Congruent;", '\u{2261}'),
    e!("Conint;", '\u{222F}'),
    e!("ContourIntegral;", '\u{222E}'),
    e!("Copf;", '\u{2102}'),
    e!("Coproduct;", '\u{2210}'),
    e!("CounterClockwiseContourIntegral;", '\u{2233}'),
    e!("Cross;", '\u{2A2F}'),
    e!("Cscr;", '\u{1D49E}'),
    e!("Cup;", '\u{22D3}'),
    e!("CupCap;", '\u{224D}'),
    e!("DD;", '\u{2145}'),
    e!("DDotrahd;", '\u{2911}'),
    e!("DJcy;", '\u{402}'),
    e!("DScy;", '\u{405}'),
    e!("DZcy;", '\u{40F}'),
    e!("Dagger;", '\u{2021}'),
    e!("Darr;", '\u{21A1}'),
    e!("Dashv;", '\u{2AE4}'),
    e!("Dcaron;", '\u{10E}'),
    e!("Dcy;", '\u{414}'),
    e!("Del;", '\u{2207}'),
    e!("Delta;", '\u{394}'),
    e!("Dfr;", '\u{1D507}'),
    e!("DiacriticalAcute;", '\u{B4}'),
    e!("DiacriticalDot;", '\u{2D9}'),
    e!("DiacriticalDoubleAcute;", '\u{2DD}'),
    e!("DiacriticalGrave;", '\u{60}'),
    e!("DiacriticalTilde;", '\u{2DC}'),
    e!("Diamond;", '\u{22C4}'),
    e!("DifferentialD;", '\u{2146}'),
    e!("Dopf;", '\u{1D53B}'),
    e!("Dot;", '\u{A8}'),
    e!("DotDot;", '\u{20DC}'),
    e!("DotEqual;", '\u{2250}'),
    e!("DoubleContourIntegral;", '\u{222F}'),
    e!("DoubleDot;", '\u{A8}'),
    e!("DoubleDownArrow;", '\u{21D3}'),
    e!("DoubleLeftArrow;", '\u{21D0}'),
    e!("DoubleLeftRightArrow;", '\u{21D4}'),
    e!("DoubleLeftTee;", '\u{2AE4}'),
    e!("DoubleLongLeftArrow;", '\u{27F8}'),
    e!("DoubleLongLeftRightArrow;", '\u{27FA}'),
    e!("DoubleLongRightArrow;", '\u{27F9}'),
    e!("DoubleRightArrow;", '\u{21D2}'),
    e!("DoubleRightTee;", '\u{22A8}'),
    e!("DoubleUpArrow;", '\u{21D1}'),
    e!("DoubleUpDownArrow;", '\u{21D5}'),
    e!("DoubleVerticalBar;", '\u{2225}'),
    e!("DownArrow;", '\u{2193}'),
    e!("DownArrowBar;", '\u{2913}'),
    e!("DownArrowUpArrow;", '\u{21F5}'),
    e!("DownBreve;", '\u{311}'),
    e!("DownLeftRightVector;", '\u{2950}'),
    e!("DownLeftTeeVector;", '\u{295E}'),
    e!("DownLeftVector;", '\u{21BD}'),
    e!("DownLeftVectorBar;", '\u{2956}'),
    e!("DownRightTeeVector;", '\u{295F}'),
    e!("DownRightVector;", '\u{21C1}'),
    e!("DownRightVectorBar;", '\u{2957}'),
    e!("DownTee;", '\u{22A4}'),
    e!("DownTeeArrow;", '\u{21A7}'),
    e!("Downarrow;", '\u{21D3}'),
    e!("Dscr;", '\u{1D49F}'),
    e!("Dstrok;", '\u{110}'),
    e!("ENG;", '\u{14A}'),
    e!("ETH", '\u{D0}'),
    e!("ETH;", '\u{D0}'),
    e!("Eacute", '\u{C9}'),
    e!("Eacute;", '\u{C9}'),
    e!("Ecaron;", '\u{11A}'),
    e!("Ecirc", '\u{CA}'),
    e!("Ecirc;", '\u{CA}'),
    e!("Ecy;", '\u{42D}'),
    e!("Edot;", '\u{116}'),
    e!("Efr;", '\u{1D508}'),
    e!("Egrave", '\u{C8}'),
    e!("Egrave;", '\u{C8}'),
    e!("Element;", '\u{2208}'),
    e!("Emacr;", '\u{112}'),
    e!("EmptySmallSquare;", '\u{25FB}'),
    e!("EmptyVerySmallSquare;", '\u{25AB}'),
    e!("Eogon;", '\u{118}'),
    e!("Eopf;", '\u{1D53C}'),
    e!("Epsilon;", '\u{395}'),
    e!("Equal;", '\u{2A75}'),
    e!("EqualTilde;", '\u{2242}'),
    e!("Equilibrium;", '\u{21CC}'),
    e!("Escr;", '\u{2130}'),
    e!("Esim;", '\u{2A73}'),
    e!("Eta;", '\u{397}'),
    e!("Euml", '\u{CB}'),
    e!("Euml;", '\u{CB}'),
    e!("Exists;", '\u{2203}'),
    e!("ExponentialE;", '\u{2147}'),
    e!("Fcy;", '\u{424}'),
    e!("Ffr;", '\u{1D509}'),
    e!("FilledSmallSquare;", '\u{25FC}'),
    e!("FilledVerySmallSquare;", '\u{25AA}'),
    e!("Fopf;", '\u{1D53D}'),
    e!("ForAll;", '\u{2200}'),
    e!("Fouriertrf;", '\u{2131}'),
    e!("Fscr;", '\u{2131}'),
    e!("GJcy;", '\u{403}'),
    e!("GT", '\u{3E}'),
    e!("GT;", '\u{3E}'),
    e!("Gamma;", '\u{393}'),
    e!("Gammad;", '\u{3DC}'),
    e!("Gbreve;", '\u{11E}'),
    e!("Gcedil;", '\u{122}'),
    e!("Gcirc;", '\u{11C}'),
    e!("Gcy;", '\u{413}'),
    e!("Gdot;", '\u{120}'),
    e!("Gfr;", '\u{1D50A}'),
    e!("Gg;", '\u{22D9}'),
    e!("Gopf;", '\u{1D53E}'),
    e!("GreaterEqual;", '\u{2265}'),
    e!("GreaterEqualLess;", '\u{22DB}'),
    e!("GreaterFullEqual;", '\u{2267}'),
    e!("GreaterGreater;", '\u{2AA2}'),
    e!("GreaterLess;", '\u{2277}'),
    e!("GreaterSlantEqual;", '\u{2A7E}'),
    e!("GreaterTilde;", '\u{2273}'),
    e!("Gscr;", '\u{1D4A2}'),
    e!("Gt;", '\u{226B}'),
    e!("HARDcy;", '\u{42A}'),
    e!("Hacek;", '\u{2C7}'),
    e!("Hat;", '\u{5E}'),
    e!("Hcirc;", '\u{124}'),
    e!("Hfr;", '\u{210C}'),
    e!("HilbertSpace;", '\u{210B}'),
    e!("Hopf;", '\u{210D}'),
    e!("HorizontalLine;", '\u{2500}'),
    e!("Hscr;", '\u{210B}'),
    e!("Hstrok;", '\u{126}'),
    e!("HumpDownHump;", '\u{224E}'),
    e!("HumpEqual;", '\u{224F}'),
    e!("IEcy;", '\u{415}'),
    e!("IJlig;", '\u{132}'),
    e!("IOcy;", '\u{401}'),
    e!("Iacute", '\u{CD}'),
    e!("Iacute;", '\u{CD}'),
    e!("Icirc", '\u{CE}'),
    e!("Icirc;", '\u{CE}'),
    e!("Icy;", '\u{418}'),
    e!("Idot;", '\u{130}'),
    e!("Ifr;", '\u{2111}'),
    e!("Igrave", '\u{CC}'),
    e!("Igrave;", '\u{CC}'),
    e!("Im;", '\u{2111}'),
    e!("Imacr;", '\u{12A}'),
    e!("ImaginaryI;", '\u{2148}'),
    e!("Implies;", '\u{21D2}'),
    e!("Int;", '\u{222C}'),
    e!("Integral;", '\u{222B}'),
    e!("Intersection;", '\u{22C2}'),
    e!("InvisibleComma;", '\u{2063}'),
    e!("InvisibleTimes;", '\u{2062}'),
    e!("Iogon;", '\u{12E}'),
    e!("Iopf;", '\u{1D540}'),
    e!("Iota;", '\u{399}'),
    e!("Iscr;", '\u{2110}'),
    e!("Itilde;", '\u{128}'),
    e!("Iukcy;", '\u{406}'),
    e!("Iuml", '\u{CF}'),
    e!("Iuml;", '\u{CF}'),
    e!("Jcirc;", '\u{134}'),
    e!("Jcy;", '\u{419}'),
    e!("Jfr;", '\u{1D50D}'),
    e!("Jopf;", '\u{1D541}'),
    e!("Jscr;", '\u{1D4A5}'),
    e!("Jsercy;", '\u{408}'),
    e!("Jukcy;", '\u{404}'),
    e!("KHcy;", '\u{425}'),
    e!("KJcy;", '\u{40C}'),
    e!("Kappa;", '\u{39A}'),
    e!("Kcedil;", '\u{136}'),
    e!("Kcy;", '\u{41A}'),
    e!("Kfr;", '\u{1D50E}'),
    e!("Kopf;", '\u{1D542}'),
    e!("Kscr;", '\u{1D4A6}'),
    e!("LJcy;", '\u{409}'),
    e!("LT", '\u{3C}'),
    e!("LT;", '\u{3C}'),
    e!("Lacute;", '\u{139}'),
    e!("Lambda;", '\u{39B}'),
    e!("Lang;", '\u{27EA}'),
    e!("Laplacetrf;", '\u{2112}'),
    e!("Larr;", '\u{219E}'),
    e!("Lcaron;", '\u{13D}'),
    e!("Lcedil;", '\u{13B}'),
    e!("Lcy;", '\u{41B}'),
    e!("LeftAngleBracket;", '\u{27E8}'),
    e!("LeftArrow;", '\u{2190}'),
    e!("LeftArrowBar;", '\u{21E4}'),
    e!("LeftArrowRightArrow;", '\u{21C6}'),
    e!("LeftCeiling;", '\u{2308}'),
    e!("LeftDoubleBracket;", '\u{27E6}'),
    e!("LeftDownTeeVector;", '\u{2961}'),
    e!("LeftDownVector;", '\u{21C3}'),
    e!("LeftDownVectorBar;", '\u{2959}'),
    e!("LeftFloor;", '\u{230A}'),
    e!("LeftRightArrow;", '\u{2194}'),
    e!("LeftRightVector;", '\u{294E}'),
    e!("LeftTee;", '\u{22A3}'),
    e!("LeftTeeArrow;", '\u{21A4}'),
    e!("LeftTeeVector;", '\u{295A}'),
    e!("LeftTriangle;", '\u{22B2}'),
    e!("LeftTriangleBar;", '\u{29CF}'),
    e!("LeftTriangleEqual;", '\u{22B4}'),
    e!("LeftUpDownVector;", '\u{2951}'),
    e!("LeftUpTeeVector;", '\u{2960}'),
    e!("LeftUpVector;", '\u{21BF}'),
    e!("LeftUpVectorBar;", '\u{2958}'),
    e!("LeftVector;", '\u{21BC}'),
    e!("LeftVectorBar;", '\u{2952}'),
    e!("Leftarrow;", '\u{21D0}'),
    e!("Leftrightarrow;", '\u{21D4}'),
    e!("LessEqualGreater;", '\u{22DA}'),
    e!("LessFullEqual;", '\u{2266}'),
    e!("LessGreater;", '\u{2276}'),
    e!("LessLess;", '\u{2AA1}'),
    e!("LessSlantEqual;", '\u{2A7D}'),
    e!("LessTilde;", '\u{2272}'),
    e!("Lfr;", '\u{1D50F}'),
    e!("Ll;", '\u{22D8}'),
    e!("Lleftarrow;", '\u{21DA}'),
    e!("Lmidot;", '\u{13F}'),
    e!("LongLeftArrow;", '\u{27F5}'),
    e!("LongLeftRightArrow;", '\u{27F7}'),
    e!("LongRightArrow;", '\u{27F6}'),
    e!("Longleftarrow;", '\u{27F8}'),
    e!("Longleftrightarrow;", '\u{27FA}'),
    e!("Longrightarrow;", '\u{27F9}'),
    e!("Lopf;", '\u{1D543}'),
    e!("LowerLeftArrow;", '\u{2199}'),
    e!("LowerRightArrow;", '\u{2198}'),
    e!("Lscr;", '\u{2112}'),
    e!("Lsh;", '\u{21B0}'),
    e!("Lstrok;", '\u{141}'),
    e!("Lt;", '\u{226A}'),
    e!("Map;", '\u{2905}'),
    e!("Mcy;", '\u{41C}'),
    e!("MediumSpace;", '\u{205F}'),
    e!("Mellintrf;", '\u{2133}'),
    e!("Mfr;", '\u{1D510}'),
    e!("MinusPlus;", '\u{2213}'),
    e!("Mopf;", '\u{1D544}'),
    e!("Mscr;", '\u{2133}'),
    e!("Mu;", '\u{39C}'),
    e!("NJcy;", '\u{40A}'),
    e!("Nacute;", '\u{143}'),
    e!("Ncaron;", '\u{147}'),
    e!("Ncedil;", '\u{145}'),
    e!("Ncy;", '\u{41D}'),
    e!("NegativeMediumSpace;", '\u{200B}'),
    e!("NegativeThickSpace;", '\u{200B}'),
    e!("NegativeThinSpace;", '\u{200B}'),
    e!("NegativeVeryThinSpace;", '\u{200B}'),
    e!("NestedGreaterGreater;", '\u{226B}'),
    e!("NestedLessLess;", '\u{226A}'),
    e!("NewLine;", '\u{A}'),
    e!("Nfr;", '\u{1D511}'),
    e!("NoBreak;", '\u{2060}'),
    e!("NonBreakingSpace;", '\u{A0}'),
    e!("Nopf;", '\u{2115}'),
    e!("Not;", '\u{2AEC}'),
    e!("NotCongruent;", '\u{2262}'),
    e!("NotCupCap;", '\u{226D}'),
    e!("NotDoubleVerticalBar;", '\u{2226}'),
    e!("NotElement;", '\u{2209}'),
    e!("NotEqual;", '\u{2260}'),
    e!("NotEqualTilde;", '\u{2242}', '\u{338}'),
    e!("NotExists;", '\u{2204}'),
    e!("NotGreater;", '\u{226F}'),
    e!("NotGreaterEqual;", '\u{2271}'),
    e!("NotGreaterFullEqual;", '\u{2267}', '\u{338}'),
    e!("NotGreaterGreater;", '\u{226B}', '\u{338}'),
    e!("NotGreaterLess;", '\u{2279}'),
    e!("NotGreaterSlantEqual;", '\u{2A7E}', '\u{338}'),
    e!("NotGreaterTilde;", '\u{2275}'),
    e!("NotHumpDownHump;", '\u{224E}', '\u{338}'),
    e!("NotHumpEqual;", '\u{224F}', '\u{338}'),
    e!("NotLeftTriangle;", '\u{22EA}'),
    e!("NotLeftTriangleBar;", '\u{29CF}', '\u{338}'),
    e!("NotLeftTriangleEqual;", '\u{22EC}'),
    e!("NotLess;", '\u{226E}'),
    e!("NotLessEqual;", '\u{2270}'),
    e!("NotLessGreater;", '\u{2278}'),
    e!("NotLessLess;", '\u{226A}', '\u{338}'),
    e!("NotLessSlantEqual;", '\u{2A7D}', '\u{338}'),
    e!("NotLessTilde;", '\u{2274}'),
    e!("NotNestedGreaterGreater;", '\u{2AA2}', '\u{338}'),
    e!("NotNestedLessLess;", '\u{2AA1}', '\u{338}'),
    e!("NotPrecedes;", '\u{2280}'),
    e!("NotPrecedesEqual;", '\u{2AAF}', '\u{338}'),
    e!("NotPrecedesSlantEqual;", '\u{22E0}'),
    e!("NotReverseElement;", '\u{220C}'),
    e!("NotRightTriangle;", '\u{22EB}'),
    e!("NotRightTriangleBar;", '\u{29D0}', '\u{338}'),
    e!("NotRightTriangleEqual;", '\u{22ED}'),
    e!("NotSquareSubset;", '\u{228F}', '\u{338}'),
    e!("NotSquareSubsetEqual;", '\u{22E2}'),
    e!("NotSquareSuperset;", '\u{2290}', '\u{338}'),
    e!("NotSquareSupersetEqual;", '\u{22E3}'),
    e!("NotSubset;", '\u{2282}', '\u{20D2}'),
    e!("NotSubsetEqual;", '\u{2288}'),
    e!("NotSucceeds;", '\u{2281}'),
    e!("NotSucceedsEqual;", '\u{2AB0}', '\u{338}'),
    e!("NotSucceedsSlantEqual;", '\u{22E1}'),
    e!("NotSucceedsTilde;", '\u{227F}', '\u{338}'),
    e!("NotSuperset;", '\u{2283}', '\u{20D2}'),
    e!("NotSupersetEqual;", '\u{2289}'),
    e!("NotTilde;", '\u{2241}'),
    e!("NotTildeEqual;", '\u{2244}'),
    e!("NotTildeFullEqual;", '\u{2247}'),
    e!("NotTildeTilde;", '\u{2249}'),
    e!("NotVerticalBar;", '\u{2224}'),
    e!("Nscr;", '\u{1D4A9}'),
    e!("Ntilde", '\u{D1}'),
    e!("Ntilde;", '\u{D1}'),
    e!("Nu;", '\u{39D}'),
    e!("OElig;", '\u{152}'),
    e!("Oacute", '\u{D3}'),
    e!("Oacute;", '\u{D3}'),
    e!("Ocirc", '\u{D4}'),
    e!("Ocirc;", '\u{D4}'),
    e!("Ocy;", '\u{41E}'),
    e!("Odblac;", '\u{150}'),
    e!("Ofr;", '\u{1D512}'),
    e!("Ograve", '\u{D2}'),
    e!("Ograve;", '\u{D2}'),
    e!("Omacr;", '\u{14C}'),
    e!("Omega;", '\u{3A9}'),
    e!("Omicron;", '\u{39F}'),
    e!("Oopf;", '\u{1D546}'),
    e!("OpenCurlyDoubleQuote;", '\u{201C}'),
    e!("OpenCurlyQuote;", '\u{2018}'),
    e!("Or;", '\u{2A54}'),
    e!("Oscr;", '\u{1D4AA}'),
    e!("Oslash", '\u{D8}'),
    e!("Oslash;", '\u{D8}'),
    e!("Otilde", '\u{D5}'),
    e!("Otilde;", '\u{D5}'),
    e!("Otimes;", '\u{2A37}'),
    e!("Ouml", '\u{D6}'),
    e!("Ouml;", '\u{D6}'),
    e!("OverBar;", '\u{203E}'),
    e!("OverBrace;", '\u{23DE}'),
    e!("OverBracket;", '\u{23B4}'),
    e!("OverParenthesis;", '\u{23DC}'),
    e!("PartialD;", '\u{2202}'),
    e!("Pcy;", '\u{41F}'),
    e!("Pfr;", '\u{1D513}'),
    e!("Phi;", '\u{3A6}'),
    e!("Pi;", '\u{3A0}'),
    e!("PlusMinus;", '\u{B1}'),
    e!("Poincareplane;", '\u{210C}'),
    e!("Popf;", '\u{2119}'),
    e!("Pr;", '\u{2ABB}'),
    e!("Precedes;", '\u{227A}'),
    e!("PrecedesEqual;", '\u{2AAF}'),
    e!("PrecedesSlantEqual;", '\u{227C}'),
    e!("PrecedesTilde;", '\u{227E}'),
    e!("Prime;", '\u{2033}'),
    e!("Product;", '\u{220F}'),
    e!("Proportion;", '\u{2237}'),
    e!("Proportional;", '\u{221D}'),
    e!("Pscr;", '\u{1D4AB}'),
    e!("Psi;", '\u{3A8}'),
    e!("QUOT", '\u{22}'),
    e!("QUOT;", '\u{22}'),
    e!("Qfr;", '\u{1D514}'),
    e!("Qopf;", '\u{211A}'),
    e!("Qscr;", '\u{1D4AC}'),
    e!("RBarr;", '\u{2910}'),
    e!("REG", '\u{AE}'),
    e!("REG;", '\u{AE}'),
    e!("Racute;", '\u{154}'),
    e!("Rang;", '\u{27EB}'),
    e!("Rarr;", '\u{21A0}'),
    e!("Rarrtl;", '\u{2916}'),
    e!("Rcaron;", '\u{158}'),
    e!("Rcedil;", '\u{156}'),
    e!("Rcy;", '\u{420}'),
    e!("Re;", '\u{211C}'),
    e!("ReverseElement;", '\u{220B}'),
    e!("ReverseEquilibrium;", '\u{21CB}'),
    e!("ReverseUpEquilibrium;", '\u{296F}'),
    e!("Rfr;", '\u{211C}'),
    e!("Rho;", '\u{3A1}'),
    e!("RightAngleBracket;", '\u{27E9}'),
    e!("RightArrow;", '\u{2192}'),
    e!("RightArrowBar;", '\u{21E5}'),
    e!("RightArrowLeftArrow;", '\u{21C4}'),
    e!("RightCeiling;", '\u{2309}'),
    e!("RightDoubleBracket;", '\u{27E7}'),
    e!("RightDownTeeVector;", '\u{295D}'),
    e!("RightDownVector;", '\u{21C2}'),
    e!("RightDownVectorBar;", '\u{2955}'),
    e!("RightFloor;", '\u{230B}'),
    e!("RightTee;", '\u{22A2}'),
    e!("RightTeeArrow;", '\u{21A6}'),
    e!("RightTeeVector;", '\u{295B}'),
    e!("RightTriangle;", '\u{22B3}'),
    e!("RightTriangleBar;", '\u{29D0}'),
    e!("RightTriangleEqual;", '\u{22B5}'),
    e!("RightUpDownVector;", '\u{294F}'),
    e!("RightUpTeeVector;", '\u{295C}'),
    e!("RightUpVector;", '\u{21BE}'),
    e!("RightUpVectorBar;", '\u{2954}'),
    e!("RightVector;", '\u{21C0}'),
    e!("RightVectorBar;", '\u{2953}'),
    e!("Rightarrow;", '\u{21D2}'),
    e!("Ropf;", '\u{211D}'),
    e!("RoundImplies;", '\u{2970}'),
    e!("Rrightarrow;", '\u{21DB}'),
    e!("Rscr;", '\u{211B}'),
    e!("Rsh;", '\u{21B1}'),
    e!("RuleDelayed;", '\u{29F4}'),
    e!("SHCHcy;", '\u{429}'),
    e!("SHcy;", '\u{428}'),
    e!("SOFTcy;", '\u{42C}'),
    e!("Sacute;", '\u{15A}'),
    e!("Sc;", '\u{2ABC}'),
    e!("Scaron;", '\u{160}'),
    e!("Scedil;", '\u{15E}'),
    e!("Scirc;", '\u{15C}'),
    e!("Scy;", '\u{421}'),
    e!("Sfr;", '\u{1D516}'),
    e!("ShortDownArrow;", '\u{2193}'),
    e!("ShortLeftArrow;", '\u{2190}'),
    e!("ShortRightArrow;", '\u{2192}'),
    e!("ShortUpArrow;", '\u{2191}'),
    e!("Sigma;", '\u{3A3}'),
    e!("SmallCircle;", '\u{2218}'),
    e!("Sopf;", '\u{1D54A}'),
    e!("Sqrt;", '\u{221A}'),
    e!("Square;", '\u{25A1}'),
    e!("SquareIntersection;", '\u{2293}'),
    e!("SquareSubset;", '\u{228F}'),
    e!("SquareSubsetEqual;", '\u{2291}'),
    e!("SquareSuperset;", '\u{2290}'),
    e!("SquareSupersetEqual;", '\u{2292}'),
    e!("SquareUnion;", '\u{2294}'),
    e!("Sscr;", '\u{1D4AE}'),
    e!("Star;", '\u{22C6}'),
    e!("Sub;", '\u{22D0}'),
    e!("Subset;", '\u{22D0}'),
    e!("SubsetEqual;", '\u{2286}'),
    e!("Succeeds;", '\u{227B}'),
    e!("SucceedsEqual;", '\u{2AB0}'),
    e!("SucceedsSlantEqual;", '\u{227D}'),
    e!("SucceedsTilde;", '\u{227F}'),
    e!("SuchThat;", '\u{220B}'),
    e!("Sum;", '\u{2211}'),
    e!("Sup;", '\u{22D1}'),
    e!("Superset;", '\u{2283}'),
    e!("SupersetEqual;", '\u{2287}'),
    e!("Supset;", '\u{22D1}'),
    e!("THORN", '\u{DE}'),
    e!("THORN;", '\u{DE}'),
    e!("TRADE;", '\u{2122}'),
    e!("TSHcy;", '\u{40B}'),
    e!("TScy;", '\u{426}'),
    e!("Tab;", '\u{9}'),
    e!("Tau;", '\u{3A4}'),
    e!("Tcaron;", '\u{164}'),
    e!("Tcedil;", '\u{162}'),
    e!("Tcy;", '\u{422}'),
    e!("Tfr;", '\u{1D517}'),
    e!("Therefore;", '\u{2234}'),
    e!("Theta;", '\u{398}'),
    e!("ThickSpace;", '\u{205F}', '\u{200A}'),
    e!("ThinSpace;", '\u{2009}'),
    e!("Tilde;", '\u{223C}'),
    e!("TildeEqual;", '\u{2243}'),
    e!("TildeFullEqual;", '\u{2245}'),
    e!("TildeTilde;", '\u{2248}'),
    e!("Topf;", '\u{1D54B}'),
    e!("TripleDot;", '\u{20DB}'),
    e!("Tscr;", '\u{1D4AF}'),
    e!("Tstrok;", '\u{166}'),
    e!("Uacute", '\u{DA}'),
    e!("Uacute;", '\u{DA}'),
    e!("Uarr;", '\u{219F}'),
    e!("Uarrocir;", '\u{2949}'),
    e!("Ubrcy;", '\u{40E}'),
    e!("Ubreve;", '\u{16C}'),
    e!("Ucirc", '\u{DB}'),
    e!("Ucirc;", '\u{DB}'),
    e!("Ucy;", '\u{423}'),
    e!("Udblac;", '\u{170}'),
    e!("Ufr;", '\u{1D518}'),
    e!("Ugrave", '\u{D9}'),
    e!("Ugrave;", '\u{D9}'),
    e!("Umacr;", '\u{16A}'),
    e!("UnderBar;", '\u{5F}'),
    e!("UnderBrace;", '\u{23DF}'),
    e!("UnderBracket;", '\u{23B5}'),
    e!("UnderParenthesis;", '\u{23DD}'),
    e!("Union;", '\u{22C3}'),
    e!("UnionPlus;", '\u{228E}'),
    e!("Uogon;", '\u{172}'),
    e!("Uopf;", '\u{1D54C}'),
    e!("UpArrow;", '\u{2191}'),
    e!("UpArrowBar;", '\u{2912}'),
    e!("UpArrowDownArrow;", '\u{21C5}'),
    e!("UpDownArrow;", '\u{2195}'),
    e!("UpEquilibrium;", '\u{296E}'),
    e!("UpTee;", '\u{22A5}'),
    e!("UpTeeArrow;", '\u{21A5}'),
    e!("Uparrow;", '\u{21D1}'),
    e!("Updownarrow;", '\u{21D5}'),
    e!("UpperLeftArrow;", '\u{2196}'),
    e!("UpperRightArrow;", '\u{2197}'),
    e!("Upsi;", '\u{3D2}'),
    e!("Upsilon;", '\u{3A5}'),
    e!("Uring;", '\u{16E}'),
    e!("Uscr;", '\u{1D4B0}'),
    e!("Utilde;", '\u{168}'),
    e!("Uuml", '\u{DC}'),
    e!("Uuml;", '\u{DC}'),
    e!("VDash;", '\u{22AB}'),
    e!("Vbar;", '\u{2AEB}'),
    e!("Vcy;", '\u{412}'),
    e!("Vdash;", '\u{22A9}'),
    e!("Vdashl;", '\u{2AE6}'),
    e!("Vee;", '\u{22C1}'),
    e!("Verbar;", '\u{2016}'),
    e!("Vert;", '\u{2016}'),
    e!("VerticalBar;", '\u{2223}'),
    e!("VerticalLine;", '\u{7C}'),
    e!("VerticalSeparator;", '\u{2758}'),
    e!("VerticalTilde;", '\u{2240}'),
    e!("VeryThinSpace;", '\u{200A}'),
    e!("Vfr;", '\u{1D519}'),
    e!("Vopf;", '\u{1D54D}'),
    e!("Vscr;", '\u{1D4B1}'),
    e!("Vvdash;", '\u{22AA}'),
    e!("Wcirc;", '\u{174}'),
    e!("Wedge;", '\u{22C0}'),
    e!("Wfr;", '\u{1D51A}'),
    e!("Wopf;", '\u{1D54E}'),
    e!("Wscr;", '\u{1D4B2}'),
    e!("Xfr;", '\u{1D51B}'),
    e!("Xi;", '\u{39E}'),
    e!("Xopf;", '\u{1D54F}'),
    e!("Xscr;", '\u{1D4B3}'),
    e!("YAcy;", '\u{42F}'),
    e!("YIcy;", '\u{407}'),
    e!("YUcy;", '\u{42E}'),
    e!("Yacute", '\u{DD}'),
    e!("Yacute;", '\u{DD}'),
    e!("Ycirc;", '\u{176}'),
    e!("Ycy;", '\u{42B}'),
    e!("Yfr;", '\u{1D51C}'),
    e!("Yopf;", '\u{1D550}'),
    e!("Yscr;", '\u{1D4B4}'),
    e!("Yuml;", '\u{178}'),
    e!("ZHcy;", '\u{416}'),
    e!("Zacute;", '\u{179}'),
    e!("Zcaron;", '\u{17D}'),
    e!("Zcy;", '\u{417}'),
    e!("Zdot;", '\u{17B}'),
    e!("ZeroWidthSpace;", '\u{200B}'),
    e!("Zeta;", '\u{396}'),
    e!("Zfr;", '\u{2128}'),
    e!("Zopf;", '\u{2124}'),
    e!("Zscr;", '\u{1D4B5}'),
    e!("aacute", '\u{E1}'),
    e!("aacute;", '\u{E1}'),
    e!("abreve;", '\u{103}'),
    e!("ac;", '\u{223E}'),
    e!("acE;", '\u{223E}', '\u{333}'),
    e!("acd;", '\u{223F}'),
    e!("acirc", '\u{E2}'),
    e!("acirc;", '\u{E2}'),
    e!("acute", '\u{B4}'),
    e!("acute;", '\u{B4}'),
    e!("acy;", '\u{430}'),
    e!("aelig", '\u{E6}'),
    e!("aelig;", '\u{E6}'),
    e!("af;", '\u{2061}'),
    e!("afr;", '\u{1D51E}'),
    e!("agrave", '\u{E0}'),
    e!("agrave;", '\u{E0}'),
    e!("alefsym;", '\u{2135}'),
    e!("aleph;", '\u{2135}'),
    e!("alpha;", '\u{3B1}'),
    e!("amacr;", '\u{101}'),
    e!("amalg;", '\u{2A3F}'),
    e!("amp", '\u{26}'),
    e!("amp;", '\u{26}'),
    e!("and;", '\u{2227}'),
    e!("andand;", '\u{2A55}'),
    e!("andd;", '\u{2A5C}'),
    e!("andslope;", '\u{2A58}'),
    e!("andv;", '\u{2A5A}'),
    e!("ang;", '\u{2220}'),
    e!("ange;", '\u{29A4}'),
    e!("angle;", '\u{2220}'),
    e!("angmsd;", '\u{2221}'),
    e!("angmsdaa;", '\u{29A8}'),
    e!("angmsdab;", '\u{29A9}'),
    e!("angmsdac;", '\u{29AA}'),
    e!("angmsdad;", '\u{29AB}'),
    e!("angmsdae;", '\u{29AC}'),
    e!("angmsdaf;", '\u{29AD}'),
    e!("angmsdag;", '\u{29AE}'),
    e!("angmsdah;", '\u{29AF}'),
    e!("angrt;", '\u{221F}'),
    e!("angrtvb;", '\u{22BE}'),
    e!("angrtvbd;", '\u{299D}'),
    e!("angsph;", '\u{2222}'),
    e!("angst;", '\u{C5}'),
    e!("angzarr;", '\u{237C}'),
    e!("aogon;", '\u{105}'),
    e!("aopf;", '\u{1D552}'),
    e!("ap;", '\u{2248}'),
    e!("apE;", '\u{2A70}'),
    e!("apacir;", '\u{2A6F}'),
    e!("ape;", '\u{224A}'),
    e!("apid;", '\u{224B}'),
    e!("apos;", '\u{27}'),
    e!("approx;", '\u{2248}'),
    e!("approxeq;", '\u{224A}'),
    e!("aring", '\u{E5}'),
    e!("aring;", '\u{E5}'),
    e!("ascr;", '\u{1D4B6}'),
    e!("ast;", '\u{2A}'),
    e!("asymp;", '\u{2248}'),
    e!("asympeq;", '\u{224D}'),
    e!("atilde", '\u{E3}'),
    e!("atilde;", '\u{E3}'),
    e!("auml", '\u{E4}'),
    e!("auml;", '\u{E4}'),
    e!("awconint;", '\u{2233}'),
    e!("awint;", '\u{2A11}'),
    e!("bNot;", '\u{2AED}'),
    e!("backcong;", '\u{224C}'),
    e!("backepsilon;", '\u{3F6}'),
    e!("backprime;", '\u{2035}'),
    e!("backsim;", '\u{223D}'),
    e!("backsimeq;", '\u{22CD}'),
    e!("barvee;", '\u{22BD}'),
    e!("barwed;", '\u{2305}'),
    e!("barwedge;", '\u{2305}'),
    e!("bbrk;", '\u{23B5}'),
    e!("bbrktbrk;", '\u{23B6}'),
    e!("bcong;", '\u{224C}'),
    e!("bcy;", '\u{431}'),
    e!("bdquo;", '\u{201E}'),
    e!("becaus;", '\u{2235}'),
    e!("because;", '\u{2235}'),
    e!("bemptyv;", '\u{29B0}'),
    e!("bepsi;", '\u{3F6}'),
    e!("bernou;", '\u{212C}'),
    e!("beta;", '\u{3B2}'),
    e!("beth;", '\u{2136}'),
    e!("between;", '\u{226C}'),
    e!("bfr;", '\u{1D51F}'),
    e!("bigcap;", '\u{22C2}'),
    e!("bigcirc;", '\u{25EF}'),
    e!("bigcup;", '\u{22C3}'),
    e!("bigodot;", '\u{2A00}'),
    e!("bigoplus;", '\u{2A01}'),
    e!("bigotimes;", '\u{2A02}'),
    e!("bigsqcup;", '\u{2A06}'),
    e!("bigstar;", '\u{2605}'),
    e!("bigtriangledown;", '\u{25BD}'),
    e!("bigtriangleup;", '\u{25B3}'),
    e!("biguplus;", '\u{2A04}'),
    e!("bigvee;", '\u{22C1}'),
    e!("bigwedge;", '\u{22C0}'),
    e!("bkarow;", '\u{290D}'),
    e!("blacklozenge;", '\u{29EB}'),
    e!("blacksquare;", '\u{25AA}'),
    e!("blacktriangle;", '\u{25B4}'),
    e!("blacktriangledown;", '\u{25BE}'),
    e!("blacktriangleleft;", '\u{25C2}'),
    e!("blacktriangleright;", '\u{25B8}'),
    e!("blank;", '\u{2423}'),
    e!("blk12;", '\u{2592}'),
    e!("blk14;", '\u{2591}'),
    e!("blk34;", '\u{2593}'),
    e!("block;", '\u{2588}'),
    e!("bne;", '\u{3D}', '\u{20E5}'),
    e!("bnequiv;", '\u{2261}', '\u{20E5}'),
    e!("bnot;", '\u{2310}'),
    e!("bopf;", '\u{1D553}'),
    e!("bot;", '\u{22A5}'),
    e!("bottom;", '\u{22A5}'),
    e!("bowtie;", '\u{22C8}'),
    e!("boxDL;", '\u{2557}'),
    e!("boxDR;", '\u{2554}'),
    e!("boxDl;", '\u{2556}'),
    e!("boxDr;", '\u{2553}'),
    e!("boxH;", '\u{2550}'),
    e!("boxHD;", '\u{2566}'),
    e!("boxHU;", '\u{2569}'),
    e!("boxHd;", '\u{2564}'),
    e!("boxHu;", '\u{2567}'),
    e!("boxUL;", '\u{255D}'),
    e!("boxUR;", '\u{255A}'),
    e!("boxUl;", '\u{255C}'),
    e!("boxUr;", '\u{2559}'),
    e!("boxV;", '\u{2551}'),
    e!("boxVH;", '\u{256C}'),
    e!("boxVL;", '\u{2563}'),
    e!("boxVR;", '\u{2560}'),
    e!("boxVh;", '\u{256B}'),
    e!("boxVl;", '\u{2562}'),
    e!("boxVr;", '\u{255F}'),
    e!("boxbox;", '\u{29C9}'),
    e!("boxdL;", '\u{2555}'),
    e!("boxdR;", '\u{2552}'),
    e!("boxdl;", '\u{2510}'),
    e!("boxdr;", '\u{250C}'),
    e!("boxh;", '\u{2500}'),
    e!("boxhD;", '\u{2565}'),
    e!("boxhU;", '\u{2568}'),
    e!("boxhd;", '\u{252C}'),
    e!("boxhu;", '\u{2534}'),
    e!("boxminus;", '\u{229F}'),
    e!("boxplus;", '\u{229E}'),
    e!("boxtimes;", '\u{22A0}'),
    e!("boxuL;", '\u{255B}'),
    e!("boxuR;", '\u{2558}'),
    e!("boxul;", '\u{2518}'),
    e!("boxur;", '\u{2514}'),
    e!("boxv;", '\u{2502}'),
    e!("boxvH;", '\u{256A}'),
    e!("boxvL;", '\u{2561}'),
    e!("boxvR;", '\u{255E}'),
    e!("boxvh;", '\u{253C}'),
    e!("boxvl;", '\u{2524}'),
    e!("boxvr;", '\u{251C}'),
    e!("bprime;", '\u{2035}'),
    e!("breve;", '\u{2D8}'),
    e!("brvbar", '\u{A6}'),
    e!("brvbar;", '\u{A6}'),
    e!("bscr;", '\u{1D4B7}'),
    e!("bsemi;", '\u{204F}'),
    e!("bsim;", '\u{223D}'),
    e!("bsime;", '\u{22CD}'),
    e!("bsol;", '\u{5C}'),
    e!("bsolb;", '\u{29C5}'),
    e!("bsolhsub;", '\u{27C8}'),
    e!("bull;", '\u{2022}'),
    e!("bullet;", '\u{2022}'),
    e!("bump;", '\u{224E}'),
    e!("bumpE;", '\u{2AAE}'),
    e!("bumpe;", '\u{224F}'),
    e!("bumpeq;", '\u{224F}'),
    e!("cacute;", '\u{107}'),
    e!("cap;", '\u{2229}'),
    e!("capand;", '\u{2A44}'),
    e!("capbrcup;", '\u{2A49}'),
    e!("capcap;", '\u{2A4B}'),
    e!("capcup;", '\u{2A47}'),
    e!("capdot;", '\u{2A40}'),
    e!("caps;", '\u{2229}', '\u{FE00}'),
    e!("caret;", '\u{2041}'),
    e!("caron;", '\u{2C7}'),
    e!("ccaps;", '\u{2A4D}'),
    e!("ccaron;", '\u{10D}'),
    e!("ccedil", '\u{E7}'),
    e!("ccedil;", '\u{E7}'),
    e!("ccirc;", '\u{109}'),
    e!("ccups;", '\u{2A4C}'),
    e!("ccupssm;", '\u{2A50}'),
    e!("cdot;", '\u{10B}'),
    e!("cedil", '\u{B8}'),
    e!("cedil;", '\u{B8}'),
    e!("cemptyv;", '\u{29B2}'),
    e!("cent", '\u{A2}'),
    e!("cent;", '\u{A2}'),
    e!("centerdot;", '\u{B7}'),
    e!("cfr;", '\u{1D520}'),
    e!("chcy;", '\u{447}'),
    e!("check;", '\u{2713}'),
    e!("checkmark;", '\u{2713}'),
    e!("chi;", '\u{3C7}'),
    e!("cir;", '\u{25CB}'),
    e!("cirE;", '\u{29C3}'),
    e!("circ;", '\u{2C6}'),
    e!("circeq;", '\u{2257}'),
    e!("circlearrowleft;", '\u{21BA}'),
    e!("circlearrowright;", '\u{21BB}'),
    e!("circledR;", '\u{AE}'),
    e!("circledS;", '\u{24C8}'),
    e!("circledast;", '\u{229B}'),
    e!("circledcirc;", '\u{229A}'),
    e!("circleddash;", '\u{229D}'),
    e!("cire;", '\u{2257}'),
    e!("cirfnint;", '\u{2A10}'),
    e!("cirmid;", '\u{2AEF}'),
    e!("cirscir;", '\u{29C2}'),
    e!("clubs;", '\u{2663}'),
    e!("clubsuit;", '\u{2663}'),
    e!("colon;", '\u{3A}'),
    e!("colone;", '\u{2254}'),
    e!("coloneq;", '\u{2254}'),
    e!("comma;", '\u{2C}'),
    e!("commat;", '\u{40}'),
    e!("comp;", '\u{2201}'),
    e!("compfn;", '\u{2218}'),
    e!("complement;", '\u{2201}'),
    e!("complexes;", '\u{2102}'),
    e!("cong;", '\u{2245}'),
    e!("congdot;", '\u{2A6D}'),
    e!("conint;", '\u{222E}'),
    e!("copf;", '\u{1D554}'),
    e!("coprod;", '\u{2210}'),
    e!("copy", '\u{A9}'),
    e!("copy;", '\u{A9}'),
    e!("copysr;", '\u{2117}'),
    e!("crarr;", '\u{21B5}'),
    e!("cross;", '\u{2717}'),
    e!("cscr;", '\u{1D4B8}'),
    e!("csub;", '\u{2ACF}'),
    e!("csube;", '\u{2AD1}'),
    e!("csup;", '\u{2AD0}'),
    e!("csupe;", '\u{2AD2}'),
    e!("ctdot;", '\u{22EF}'),
    e!("cudarrl;", '\u{2938}'),
    e!("cudarrr;", '\u{2935}'),
    e!("cuepr;", '\u{22DE}'),
    e!("cuesc;", '\u{22DF}'),
    e!("cularr;", '\u{21B6}'),
    e!("cularrp;", '\u{293D}'),
    e!("cup;", '\u{222A}'),
    e!("cupbrcap;", '\u{2A48}'),
    e!("cupcap;", '\u{2A46}'),
    e!("cupcup;", '\u{2A4A}'),
    e!("cupdot;", '\u{228D}'),
    e!("cupor;", '\u{2A45}'),
    e!("cups;", '\u{222A}', '\u{FE00}'),
    e!("curarr;", '\u{21B7}'),
    e!("curarrm;", '\u{293C}'),
    e!("curlyeqprec;", '\u{22DE}'),
    e!("curlyeqsucc;", '\u{22DF}'),
    e!("curlyvee;", '\u{22CE}'),
    e!("curlywedge;", '\u{22CF}'),
    e!("curren", '\u{A4}'),
    e!("curren;", '\u{A4}'),
    e!("curvearrowleft;", '\u{21B6}'),
    e!("curvearrowright;", '\u{21B7}'),
    e!("cuvee;", '\u{22CE}'),
    e!("cuwed;", '\u{22CF}'),
    e!("cwconint;", '\u{2232}'),
    e!("cwint;", '\u{2231}'),
    e!("cylcty;", '\u{232D}'),
    e!("dArr;", '\u{21D3}'),
    e!("dHar;", '\u{2965}'),
    e!("dagger;", '\u{2020}'),
    e!("daleth;", '\u{2138}'),
    e!("darr;", '\u{2193}'),
    e!("dash;", '\u{2010}'),
    e!("dashv;", '\u{22A3}'),
    e!("dbkarow;", '\u{290F}'),
    e!("dblac;", '\u{2DD}'),
    e!("dcaron;", '\u{10F}'),
    e!("dcy;", '\u{434}'),
    e!("dd;", '\u{2146}'),
    e!("ddagger;", '\u{2021}'),
    e!("ddarr;", '\u{21CA}'),
    e!("ddotseq;", '\u{2A77}'),
    e!("deg", '\u{B0}'),
    e!("deg;", '\u{B0}'),
    e!("delta;", '\u{3B4}'),
    e!("demptyv;", '\u{29B1}'),
    e!("dfisht;", '\u{297F}'),
    e!("dfr;", '\u{1D521}'),
    e!("dharl;", '\u{21C3}'),
    e!("dharr;", '\u{21C2}'),
    e!("diam;", '\u{22C4}'),
    e!("diamond;", '\u{22C4}'),
    e!("diamondsuit;", '\u{2666}'),
    e!("diams;", '\u{2666}'),
    e!("die;", '\u{A8}'),
    e!("digamma;", '\u{3DD}'),
    e!("disin;", '\u{22F2}'),
    e!("div;", '\u{F7}'),
    e!("divide", '\u{F7}'),
    e!("divide;", '\u{F7}'),
    e!("divideontimes;", '\u{22C7}'),
    e!("divonx;", '\u{22C7}'),
    e!("djcy;", '\u{452}'),
    e!("dlcorn;", '\u{231E}'),
    e!("dlcrop;", '\u{230D}'),
    e!("dollar;", '\u{24}'),
    e!("dopf;", '\u{1D555}'),
    e!("dot;", '\u{2D9}'),
    e!("doteq;", '\u{2250}'),
    e!("doteqdot;", '\u{2251}'),
    e!("dotminus;", '\u{2238}'),
    e!("dotplus;", '\u{2214}'),
    e!("dotsquare;", '\u{22A1}'),
    e!("doublebarwedge;", '\u{2306}'),
    e!("downarrow;", '\u{2193}'),
    e!("downdownarrows;", '\u{21CA}'),
    e!("downharpoonleft;", '\u{21C3}'),
    e!("downharpoonright;", '\u{21C2}'),
    e!("drbkarow;", '\u{2910}'),
    e!("drcorn;", '\u{231F}'),
    e!("drcrop;", '\u{230C}'),
    e!("dscr;", '\u{1D4B9}'),
    e!("dscy;", '\u{455}'),
    e!("dsol;", '\u{29F6}'),
    e!("dstrok;", '\u{111}'),
    e!("dtdot;", '\u{22F1}'),
    e!("dtri;", '\u{25BF}'),
    e!("dtrif;", '\u{25BE}'),
    e!("duarr;", '\u{21F5}'),
    e!("duhar;", '\u{296F}'),
    e!("dwangle;", '\u{29A6}'),
    e!("dzcy;", '\u{45F}'),
    e!("dzigrarr;", '\u{27FF}'),
    e!("eDDot;", '\u{2A77}'),
    e!("eDot;", '\u{2251}'),
    e!("eacute", '\u{E9}'),
    e!("eacute;", '\u{E9}'),
    e!("easter;", '\u{2A6E}'),
    e!("ecaron;", '\u{11B}'),
    e!("ecir;", '\u{2256}'),
    e!("ecirc", '\u{EA}'),
    e!("ecirc;", '\u{EA}'),
    e!("ecolon;", '\u{2255}'),
    e!("ecy;", '\u{44D}'),
    e!("edot;", '\u{117}'),
    e!("ee;", '\u{2147}'),
    e!("efDot;", '\u{2252}'),
    e!("efr;", '\u{1D522}'),
    e!("eg;", '\u{2A9A}'),
    e!("egrave", '\u{E8}'),
    e!("egrave;", '\u{E8}'),
    e!("egs;", '\u{2A96}'),
    e!("egsdot;", '\u{2A98}'),
    e!("el;", '\u{2A99}'),
    e!("elinters;", '\u{23E7}'),
    e!("ell;", '\u{2113}'),
    e!("els;", '\u{2A95}'),
    e!("elsdot;", '\u{2A97}'),
    e!("emacr;", '\u{113}'),
    e!("empty;", '\u{2205}'),
    e!("emptyset;", '\u{2205}'),
    e!("emptyv;", '\u{2205}'),
    e!("emsp13;", '\u{2004}'),
    e!("emsp14;", '\u{2005}'),
    e!("emsp;", '\u{2003}'),
    e!("eng;", '\u{14B}'),
    e!("ensp;", '\u{2002}'),
    e!("eogon;", '\u{119}'),
    e!("eopf;", '\u{1D556}'),
    e!("epar;", '\u{22D5}'),
    e!("eparsl;", '\u{29E3}'),
    e!("eplus;", '\u{2A71}'),
    e!("epsi;", '\u{3B5}'),
    e!("epsilon;", '\u{3B5}'),
    e!("epsiv;", '\u{3F5}'),
    e!("eqcirc;", '\u{2256}'),
    e!("eqcolon;", '\u{2255}'),
    e!("eqsim;", '\u{2242}'),
    e!("eqslantgtr;", '\u{2A96}'),
    e!("eqslantless;", '\u{2A95}'),
    e!("equals;", '\u{3D}'),
    e!("equest;", '\u{225F}'),
    e!("equiv;", '\u{2261}'),
    e!("equivDD;", '\u{2A78}'),
    e!("eqvparsl;", '\u{29E5}'),
    e!("erDot;", '\u{2253}'),
    e!("erarr;", '\u{2971}'),
    e!("escr;", '\u{212F}'),
    e!("esdot;", '\u{2250}'),
    e!("esim;", '\u{2242}'),
    e!("eta;", '\u{3B7}'),
    e!("eth", '\u{F0}'),
    e!("eth;", '\u{F0}'),
    e!("euml", '\u{EB}'),
    e!("euml;", '\u{EB}'),
    e!("euro;", '\u{20AC}'),
    e!("excl;", '\u{21}'),
    e!("exist;", '\u{2203}'),
    e!("expectation;", '\u{2130}'),
    e!("exponentiale;", '\u{2147}'),
    e!("fallingdotseq;", '\u{2252}'),
    e!("fcy;", '\u{444}'),
    e!("female;", '\u{2640}'),
    e!("ffilig;", '\u{FB03}'),
    e!("fflig;", '\u{FB00}'),
    e!("ffllig;", '\u{FB04}'),
    e!("ffr;", '\u{1D523}'),
    e!("filig;", '\u{FB01}'),
    e!("fjlig;", '\u{66}', '\u{6A}'),
    e!("flat;", '\u{266D}'),
    e!("fllig;", '\u{FB02}'),
    e!("fltns;", '\u{25B1}'),
    e!("fnof;", '\u{192}'),
    e!("fopf;", '\u{1D557}'),
    e!("forall;", '\u{2200}'),
    e!("fork;", '\u{22D4}'),
    e!("forkv;", '\u{2AD9}'),
    e!("fpartint;", '\u{2A0D}'),
    e!("frac12", '\u{BD}'),
    e!("frac12;", '\u{BD}'),
    e!("frac13;", '\u{2153}'),
    e!("frac14", '\u{BC}'),
    e!("frac14;", '\u{BC}'),
    e!("frac15;", '\u{2155}'),
    e!("frac16;", '\u{2159}'),
    e!("frac18;", '\u{215B}'),
    e!("frac23;", '\u{2154}'),
    e!("frac25;", '\u{2156}'),
    e!("frac34", '\u{BE}'),
    e!("frac34;", '\u{BE}'),
    e!("frac35;", '\u{2157}'),
    e!("frac38;", '\u{215C}'),
    e!("frac45;", '\u{2158}'),
    e!("frac56;", '\u{215A}'),
    e!("frac58;", '\u{215D}'),
    e!("frac78;", '\u{215E}'),
    e!("frasl;", '\u{2044}'),
    e!("frown;", '\u{2322}'),
    e!("fscr;", '\u{1D4BB}'),
    e!("gE;", '\u{2267}'),
    e!("gEl;", '\u{2A8C}'),
    e!("gacute;", '\u{1F5}'),
    e!("gamma;", '\u{3B3}'),
    e!("gammad;", '\u{3DD}'),
    e!("gap;", '\u{2A86}'),
    e!("gbreve;", '\u{11F}'),
    e!("gcirc;", '\u{11D}'),
    e!("gcy;", '\u{433}'),
    e!("gdot;", '\u{121}'),
    e!("ge;", '\u{2265}'),
    e!("gel;", '\u{22DB}'),
    e!("geq;", '\u{2265}'),
    e!("geqq;", '\u{2267}'),
    e!("geqslant;", '\u{2A7E}'),
    e!("ges;", '\u{2A7E}'),
    e!("gescc;", '\u{2AA9}'),
    e!("gesdot;", '\u{2A80}'),
    e!("gesdoto;", '\u{2A82}'),
    e!("gesdotol;", '\u{2A84}'),
    e!("gesl;", '\u{22DB}', '\u{FE00}'),
    e!("gesles;", '\u{2A94}'),
    e!("gfr;", '\u{1D524}'),
    e!("gg;", '\u{226B}'),
    e!("ggg;", '\u{22D9}'),
    e!("gimel;", '\u{2137}'),
    e!("gjcy;", '\u{453}'),
    e!("gl;", '\u{2277}'),
    e!("glE;", '\u{2A92}'),
    e!("gla;", '\u{2AA5}'),
    e!("glj;", '\u{2AA4}'),
    e!("gnE;", '\u{2269}'),
    e!("gnap;", '\u{2A8A}'),
    e!("gnapprox;", '\u{2A8A}'),
    e!("gne;", '\u{2A88}'),
    e!("gneq;", '\u{2A88}'),
    e!("gneqq;", '\u{2269}'),
    e!("gnsim;", '\u{22E7}'),
    e!("gopf;", '\u{1D558}'),
    e!("grave;", '\u{60}'),
    e!("gscr;", '\u{210A}'),
    e!("gsim;", '\u{2273}'),
    e!("gsime;", '\u{2A8E}'),
    e!("gsiml;", '\u{2A90}'),
    e!("gt", '\u{3E}'),
    e!("gt;", '\u{3E}'),
    e!("gtcc;", '\u{2AA7}'),
    e!("gtcir;", '\u{2A7A}'),
    e!("gtdot;", '\u{22D7}'),
    e!("gtlPar;", '\u{2995}'),
    e!("gtquest;", '\u{2A7C}'),
    e!("gtrapprox;", '\u{2A86}'),
    e!("gtrarr;", '\u{2978}'),
    e!("gtrdot;", '\u{22D7}'),
    e!("gtreqless;", '\u{22DB}'),
    e!("gtreqqless;", '\u{2A8C}'),
    e!("gtrless;", '\u{2277}'),
    e!("gtrsim;", '\u{2273}'),
    e!("gvertneqq;", '\u{2269}', '\u{FE00}'),
    e!("gvnE;", '\u{2269}', '\u{FE00}'),
    e!("hArr;", '\u{21D4}'),
    e!("hairsp;", '\u{200A}'),
    e!("half;", '\u{BD}'),
    e!("hamilt;", '\u{210B}'),
    e!("hardcy;", '\u{44A}'),
    e!("harr;", '\u{2194}'),
    e!("harrcir;", '\u{2948}'),
    e!("harrw;", '\u{21AD}'),
    e!("hbar;", '\u{210F}'),
    e!("hcirc;", '\u{125}'),
    e!("hearts;", '\u{2665}'),
    e!("heartsuit;", '\u{2665}'),
    e!("hellip;", '\u{2026}'),
    e!("hercon;", '\u{22B9}'),
    e!("hfr;", '\u{1D525}'),
    e!("hksearow;", '\u{2925}'),
    e!("hkswarow;", '\u{2926}'),
    e!("hoarr;", '\u{21FF}'),
    e!("homtht;", '\u{223B}'),
    e!("hookleftarrow;", '\u{21A9}'),
    e!("hookrightarrow;", '\u{21AA}'),
    e!("hopf;", '\u{1D559}'),
    e!("horbar;", '\u{2015}'),
    e!("hscr;", '\u{1D4BD}'),
    e!("hslash;", '\u{210F}'),
    e!("hstrok;", '\u{127}'),
    e!("hybull;", '\u{2043}'),
    e!("hyphen;", '\u{2010}'),
    e!("iacute", '\u{ED}'),
    e!("iacute;", '\u{ED}'),
    e!("ic;", '\u{2063}'),
    e!("icirc", '\u{EE}'),
    e!("icirc;", '\u{EE}'),
    e!("icy;", '\u{438}'),
    e!("iecy;", '\u{435}'),
    e!("iexcl", '\u{A1}'),
    e!("iexcl;", '\u{A1}'),
    e!("iff;", '\u{21D4}'),
    e!("ifr;", '\u{1D526}'),
    e!("igrave", '\u{EC}'),
    e!("igrave;", '\u{EC}'),
    e!("ii;", '\u{2148}'),
    e!("iiiint;", '\u{2A0C}'),
    e!("iiint;", '\u{222D}'),
    e!("iinfin;", '\u{29DC}'),
    e!("iiota;", '\u{2129}'),
    e!("ijlig;", '\u{133}'),
    e!("imacr;", '\u{12B}'),
    e!("image;", '\u{2111}'),
    e!("imagline;", '\u{2110}'),
    e!("imagpart;", '\u{2111}'),
    e!("imath;", '\u{131}'),
    e!("imof;", '\u{22B7}'),
    e!("imped;", '\u{1B5}'),
    e!("in;", '\u{2208}'),
    e!("incare;", '\u{2105}'),
    e!("infin;", '\u{221E}'),
    e!("infintie;", '\u{29DD}'),
    e!("inodot;", '\u{131}'),
    e!("int;", '\u{222B}'),
    e!("intcal;", '\u{22BA}'),
    e!("integers;", '\u{2124}'),
    e!("intercal;", '\u{22BA}'),
    e!("intlarhk;", '\u{2A17}'),
    e!("intprod;", '\u{2A3C}'),
    e!("iocy;", '\u{451}'),
    e!("iogon;", '\u{12F}'),
    e!("iopf;", '\u{1D55A}'),
    e!("iota;", '\u{3B9}'),
    e!("iprod;", '\u{2A3C}'),
    e!("iquest", '\u{BF}'),
    e!("iquest;", '\u{BF}'),
    e!("iscr;", '\u{1D4BE}'),
    e!("isin;", '\u{2208}'),
    e!("isinE;", '\u{22F9}'),
    e!("isindot;", '\u{22F5}'),
    e!("isins;", '\u{22F4}'),
    e!("isinsv;", '\u{22F3}'),
    e!("isinv;", '\u{2208}'),
    e!("it;", '\u{2062}'),
    e!("itilde;", '\u{129}'),
    e!("iukcy;", '\u{456}'),
    e!("iuml", '\u{EF}'),
    e!("iuml;", '\u{EF}'),
    e!("jcirc;", '\u{135}'),
    e!("jcy;", '\u{439}'),
    e!("jfr;", '\u{1D527}'),
    e!("jmath;", '\u{237}'),
    e!("jopf;", '\u{1D55B}'),
    e!("jscr;", '\u{1D4BF}'),
    e!("jsercy;", '\u{458}'),
    e!("jukcy;", '\u{454}'),
    e!("kappa;", '\u{3BA}'),
    e!("kappav;", '\u{3F0}'),
    e!("kcedil;", '\u{137}'),
    e!("kcy;", '\u{43A}'),
    e!("kfr;", '\u{1D528}'),
    e!("kgreen;", '\u{138}'),
    e!("khcy;", '\u{445}'),
    e!("kjcy;", '\u{45C}'),
    e!("kopf;", '\u{1D55C}'),
    e!("kscr;", '\u{1D4C0}'),
    e!("lAarr;", '\u{21DA}'),
    e!("lArr;", '\u{21D0}'),
    e!("lAtail;", '\u{291B}'),
    e!("lBarr;", '\u{290E}'),
    e!("lE;", '\u{2266}'),
    e!("lEg;", '\u{2A8B}'),
    e!("lHar;", '\u{2962}'),
    e!("lacute;", '\u{13A}'),
    e!("laemptyv;", '\u{29B4}'),
    e!("lagran;", '\u{2112}'),
    e!("lambda;", '\u{3BB}'),
    e!("lang;", '\u{27E8}'),
    e!("langd;", '\u{2991}'),
    e!("langle;", '\u{27E8}'),
    e!("lap;", '\u{2A85}'),
    e!("laquo", '\u{AB}'),
    e!("laquo;", '\u{AB}'),
    e!("larr;", '\u{2190}'),
    e!("larrb;", '\u{21E4}'),
    e!("larrbfs;", '\u{291F}'),
    e!("larrfs;", '\u{291D}'),
    e!("larrhk;", '\u{21A9}'),
    e!("larrlp;", '\u{21AB}'),
    e!("larrpl;", '\u{2939}'),
    e!("larrsim;", '\u{2973}'),
    e!("larrtl;", '\u{21A2}'),
    e!("lat;", '\u{2AAB}'),
    e!("latail;", '\u{2919}'),
    e!("late;", '\u{2AAD}'),
    e!("lates;", '\u{2AAD}', '\u{FE00}'),
    e!("lbarr;", '\u{290C}'),
    e!("lbbrk;", '\u{2772}'),
    e!("lbrace;", '\u{7B}'),
    e!("lbrack;", '\u{5B}'),
    e!("lbrke;", '\u{298B}'),
    e!("lbrksld;", '\u{298F}'),
    e!("lbrkslu;", '\u{298D}'),
    e!("lcaron;", '\u{13E}'),
    e!("lcedil;", '\u{13C}'),
    e!("lceil;", '\u{2308}'),
    e!("lcub;", '\u{7B}'),
    e!("lcy;", '\u{43B}'),
    e!("ldca;", '\u{2936}'),
    e!("ldquo;", '\u{201C}'),
    e!("ldquor;", '\u{201E}'),
    e!("ldrdhar;", '\u{2967}'),
    e!("ldrushar;", '\u{294B}'),
    e!("ldsh;", '\u{21B2}'),
    e!("le;", '\u{2264}'),
    e!("leftarrow;", '\u{2190}'),
    e!("leftarrowtail;", '\u{21A2}'),
    e!("leftharpoondown;", '\u{21BD}'),
    e!("leftharpoonup;", '\u{21BC}'),
    e!("leftleftarrows;", '\u{21C7}'),
    e!("leftrightarrow;", '\u{2194}'),
    e!("leftrightarrows;", '\u{21C6}'),
    e!("leftrightharpoons;", '\u{21CB}'),
    e!("leftrightsquigarrow;", '\u{21AD}'),
    e!("leftthreetimes;", '\u{22CB}'),
    e!("leg;", '\u{22DA}'),
    e!("leq;", '\u{2264}'),
    e!("leqq;", '\u{2266}'),
    e!("leqslant;", '\u{2A7D}'),
    e!("les;", '\u{2A7D}'),
    e!("lescc;", '\u{2AA8}'),
    e!("lesdot;", '\u{2A7F}'),
    e!("lesdoto;", '\u{2A81}'),
    e!("lesdotor;", '\u{2A83}'),
    e!("lesg;", '\u{22DA}', '\u{FE00}'),
    e!("lesges;", '\u{2A93}'),
    e!("lessapprox;", '\u{2A85}'),
    e!("lessdot;", '\u{22D6}'),
    e!("lesseqgtr;", '\u{22DA}'),
    e!("lesseqqgtr;", '\u{2A8B}'),
    e!("lessgtr;", '\u{2276}'),
    e!("lesssim;", '\u{2272}'),
    e!("lfisht;", '\u{297C}'),
    e!("lfloor;", '\u{230A}'),
    e!("lfr;", '\u{1D529}'),
    e!("lg;", '\u{2276}'),
    e!("lgE;", '\u{2A91}'),
    e!("lhard;", '\u{21BD}'),
    e!("lharu;", '\u{21BC}'),
    e!("lharul;", '\u{296A}'),
    e!("lhblk;", '\u{2584}'),
    e!("ljcy;", '\u{459}'),
    e!("ll;", '\u{226A}'),
    e!("llarr;", '\u{21C7}'),
    e!("llcorner;", '\u{231E}'),
    e!("llhard;", '\u{296B}'),
    e!("lltri;", '\u{25FA}'),
    e!("lmidot;", '\u{140}'),
    e!("lmoust;", '\u{23B0}'),
    e!("lmoustache;", '\u{23B0}'),
    e!("lnE;", '\u{2268}'),
    e!("lnap;", '\u{2A89}'),
    e!("lnapprox;", '\u{2A89}'),
    e!("lne;", '\u{2A87}'),
    e!("lneq;", '\u{2A87}'),
    e!("lneqq;", '\u{2268}'),
    e!("lnsim;", '\u{22E6}'),
    e!("loang;", '\u{27EC}'),
    e!("loarr;", '\u{21FD}'),
    e!("lobrk;", '\u{27E6}'),
    e!("longleftarrow;", '\u{27F5}'),
    e!("longleftrightarrow;", '\u{27F7}'),
    e!("longmapsto;", '\u{27FC}'),
    e!("longrightarrow;", '\u{27F6}'),
    e!("looparrowleft;", '\u{21AB}'),
    e!("looparrowright;", '\u{21AC}'),
    e!("lopar;", '\u{2985}'),
    e!("lopf;", '\u{1D55D}'),
    e!("loplus;", '\u{2A2D}'),
    e!("lotimes;", '\u{2A34}'),
    e!("lowast;", '\u{2217}'),
    e!("lowbar;", '\u{5F}'),
    e!("loz;", '\u{25CA}'),
    e!("lozenge;", '\u{25CA}'),
    e!("lozf;", '\u{29EB}'),
    e!("lpar;", '\u{28}'),
    e!("lparlt;", '\u{2993}'),
    e!("lrarr;", '\u{21C6}'),
    e!("lrcorner;", '\u{231F}'),
    e!("lrhar;", '\u{21CB}'),
    e!("lrhard;", '\u{296D}'),
    e!("lrm;", '\u{200E}'),
    e!("lrtri;", '\u{22BF}'),
    e!("lsaquo;", '\u{2039}'),
    e!("lscr;", '\u{1D4C1}'),
    e!("lsh;", '\u{21B0}'),
    e!("lsim;", '\u{2272}'),
    e!("lsime;", '\u{2A8D}'),
    e!("lsimg;", '\u{2A8F}'),
    e!("lsqb;", '\u{5B}'),
    e!("lsquo;", '\u{2018}'),
    e!("lsquor;", '\u{201A}'),
    e!("lstrok;", '\u{142}'),
    e!("lt", '\u{3C}'),
    e!("lt;", '\u{3C}'),
    e!("ltcc;", '\u{2AA6}'),
    e!("ltcir;", '\u{2A79}'),
    e!("ltdot;", '\u{22D6}'),
    e!("lthree;", '\u{22CB}'),
    e!("ltimes;", '\u{22C9}'),
    e!("ltlarr;", '\u{2976}'),
    e!("ltquest;", '\u{2A7B}'),
    e!("ltrPar;", '\u{2996}'),
    e!("ltri;", '\u{25C3}'),
    e!("ltrie;", '\u{22B4}'),
    e!("ltrif;", '\u{25C2}'),
    e!("lurdshar;", '\u{294A}'),
    e!("luruhar;", '\u{2966}'),
    e!("lvertneqq;", '\u{2268}', '\u{FE00}'),
    e!("lvnE;", '\u{2268}', '\u{FE00}'),
    e!("mDDot;", '\u{223A}'),
    e!("macr", '\u{AF}'),
    e!("macr;", '\u{AF}'),
    e!("male;", '\u{2642}'),
    e!("malt;", '\u{2720}'),
    e!("maltese;", '\u{2720}'),
    e!("map;", '\u{21A6}'),
    e!("mapsto;", '\u{21A6}'),
    e!("mapstodown;", '\u{21A7}'),
    e!("mapstoleft;", '\u{21A4}'),
    e!("mapstoup;", '\u{21A5}'),
    e!("marker;", '\u{25AE}'),
    e!("mcomma;", '\u{2A29}'),
    e!("mcy;", '\u{43C}'),
    e!("mdash;", '\u{2014}'),
    e!("measuredangle;", '\u{2221}'),
    e!("mfr;", '\u{1D52A}'),
    e!("mho;", '\u{2127}'),
    e!("micro", '\u{B5}'),
    e!("micro;", '\u{B5}'),
    e!("mid;", '\u{2223}'),
    e!("midast;", '\u{2A}'),
    e!("midcir;", '\u{2AF0}'),
    e!("middot", '\u{B7}'),
    e!("middot;", '\u{B7}'),
    e!("minus;", '\u{2212}'),
    e!("minusb;", '\u{229F}'),
    e!("minusd;", '\u{2238}'),
    e!("minusdu;", '\u{2A2A}'),
    e!("mlcp;", '\u{2ADB}'),
    e!("mldr;", '\u{2026}'),
    e!("mnplus;", '\u{2213}'),
    e!("models;", '\u{22A7}'),
    e!("mopf;", '\u{1D55E}'),
    e!("mp;", '\u{2213}'),
    e!("mscr;", '\u{1D4C2}'),
    e!("mstpos;", '\u{223E}'),
    e!("mu;", '\u{3BC}'),
    e!("multimap;", '\u{22B8}'),
    e!("mumap;", '\u{22B8}'),
    e!("nGg;", '\u{22D9}', '\u{338}'),
    e!("nGt;", '\u{226B}', '\u{20D2}'),
    e!("nGtv;", '\u{226B}', '\u{338}'),
    e!("nLeftarrow;", '\u{21CD}'),
    e!("nLeftrightarrow;", '\u{21CE}'),
    e!("nLl;", '\u{22D8}', '\u{338}'),
    e!("nLt;", '\u{226A}', '\u{20D2}'),
    e!("nLtv;", '\u{226A}', '\u{338}'),
    e!("nRightarrow;", '\u{21CF}'),
    e!("nVDash;", '\u{22AF}'),
    e!("nVdash;", '\u{22AE}'),
    e!("nabla;", '\u{2207}'),
    e!("nacute;", '\u{144}'),
    e!("nang;", '\u{2220}', '\u{20D2}'),
    e!("nap;", '\u{2249}'),
    e!("napE;", '\u{2A70}', '\u{338}'),
    e!("napid;", '\u{224B}', '\u{338}'),
    e!("napos;", '\u{149}'),
    e!("napprox;", '\u{2249}'),
    e!("natur;", '\u{266E}'),
    e!("natural;", '\u{266E}'),
    e!("naturals;", '\u{2115}'),
    e!("nbsp", '\u{A0}'),
    e!("nbsp;", '\u{A0}'),
    e!("nbump;", '\u{224E}', '\u{338}'),
    e!("nbumpe;", '\u{224F}', '\u{338}'),
    e!("ncap;", '\u{2A43}'),
    e!("ncaron;", '\u{148}'),
    e!("ncedil;", '\u{146}'),
    e!("ncong;", '\u{2247}'),
    e!("ncongdot;", '\u{2A6D}', '\u{338}'),
    e!("ncup;", '\u{2A42}'),
    e!("ncy;", '\u{43D}'),
    e!("ndash;", '\u{2013}'),
    e!("ne;", '\u{2260}'),
    e!("neArr;", '\u{21D7}'),
    e!("nearhk;", '\u{2924}'),
    e!("nearr;", '\u{2197}'),
    e!("nearrow;", '\u{2197}'),
    e!("nedot;", '\u{2250}', '\u{338}'),
    e!("nequiv;", '\u{2262}'),
    e!("nesear;", '\u{2928}'),
    e!("nesim;", '\u{2242}', '\u{338}'),
    e!("nexist;", '\u{2204}'),
    e!("nexists;", '\u{2204}'),
    e!("nfr;", '\u{1D52B}'),
    e!("ngE;", '\u{2267}', '\u{338}'),
    e!("nge;", '\u{2271}'),
    e!("ngeq;", '\u{2271}'),
    e!("ngeqq;", '\u{2267}', '\u{338}'),
    e!("ngeqslant;", '\u{2A7E}', '\u{338}'),
    e!("nges;", '\u{2A7E}', '\u{338}'),
    e!("ngsim;", '\u{2275}'),
    e!("ngt;", '\u{226F}'),
    e!("ngtr;", '\u{226F}'),
    e!("nhArr;", '\u{21CE}'),
    e!("nharr;", '\u{21AE}'),
    e!("nhpar;", '\u{2AF2}'),
    e!("ni;", '\u{220B}'),
    e!("nis;", '\u{22FC}'),
    e!("nisd;", '\u{22FA}'),
    e!("niv;", '\u{220B}'),
    e!("njcy;", '\u{45A}'),
    e!("nlArr;", '\u{21CD}'),
    e!("nlE;", '\u{2266}', '\u{338}'),
    e!("nlarr;", '\u{219A}'),
    e!("nldr;", '\u{2025}'),
    e!("nle;", '\u{2270}'),
    e!("nleftarrow;", '\u{219A}'),
    e!("nleftrightarrow;", '\u{21AE}'),
    e!("nleq;", '\u{2270}'),
    e!("nleqq;", '\u{2266}', '\u{338}'),
    e!("nleqslant;", '\u{2A7D}', '\u{338}'),
    e!("nles;", '\u{2A7D}', '\u{338}'),
    e!("nless;", '\u{226E}'),
    e!("nlsim;", '\u{2274}'),
    e!("nlt;", '\u{226E}'),
    e!("nltri;", '\u{22EA}'),
    e!("nltrie;", '\u{22EC}'),
    e!("nmid;", '\u{2224}'),
    e!("nopf;", '\u{1D55F}'),
    e!("not", '\u{AC}'),
    e!("not;", '\u{AC}'),
    e!("notin;", '\u{2209}'),
    e!("notinE;", '\u{22F9}', '\u{338}'),
    e!("notindot;", '\u{22F5}', '\u{338}'),
    e!("notinva;", '\u{2209}'),
    e!("notinvb;", '\u{22F7}'),
    e!("notinvc;", '\u{22F6}'),
    e!("notni;", '\u{220C}'),
    e!("notniva;", '\u{220C}'),
    e!("notnivb;", '\u{22FE}'),
    e!("notnivc;", '\u{22FD}'),
    e!("npar;", '\u{2226}'),
    e!("nparallel;", '\u{2226}'),
    e!("nparsl;", '\u{2AFD}', '\u{20E5}'),
    e!("npart;", '\u{2202}', '\u{338}'),
    e!("npolint;", '\u{2A14}'),
    e!("npr;", '\u{2280}'),
    e!("nprcue;", '\u{22E0}'),
    e!("npre;", '\u{2AAF}', '\u{338}'),
    e!("nprec;", '\u{2280}'),
    e!("npreceq;", '\u{2AAF}', '\u{338}'),
    e!("nrArr;", '\u{21CF}'),
    e!("nrarr;", '\u{219B}'),
    e!("nrarrc;", '\u{2933}', '\u{338}'),
    e!("nrarrw;", '\u{219D}', '\u{338}'),
    e!("nrightarrow;", '\u{219B}'),
    e!("nrtri;", '\u{22EB}'),
    e!("nrtrie;", '\u{22ED}'),
    e!("nsc;", '\u{2281}'),
    e!("nsccue;", '\u{22E1}'),
    e!("nsce;", '\u{2AB0}', '\u{338}'),
    e!("nscr;", '\u{1D4C3}'),
    e!("nshortmid;", '\u{2224}'),
    e!("nshortparallel;", '\u{2226}'),
    e!("nsim;", '\u{2241}'),
    e!("nsime;", '\u{2244}'),
    e!("nsimeq;", '\u{2244}'),
    e!("nsmid;", '\u{2224}'),
    e!("nspar;", '\u{2226}'),
    e!("nsqsube;", '\u{22E2}'),
    e!("nsqsupe;", '\u{22E3}'),
    e!("nsub;", '\u{2284}'),
    e!("nsubE;", '\u{2AC5}', '\u{338}'),
    e!("nsube;", '\u{2288}'),
    e!("nsubset;", '\u{2282}', '\u{20D2}'),
    e!("nsubseteq;", '\u{2288}'),
    e!("nsubseteqq;", '\u{2AC5}', '\u{338}'),
    e!("nsucc;", '\u{2281}'),
    e!("nsucceq;", '\u{2AB0}', '\u{338}'),
    e!("nsup;", '\u{2285}'),
    e!("nsupE;", '\u{2AC6}', '\u{338}'),
    e!("nsupe;", '\u{2289}'),
    e!("nsupset;", '\u{2283}', '\u{20D2}'),
    e!("nsupseteq;", '\u{2289}'),
    e!("nsupseteqq;", '\u{2AC6}', '\u{338}'),
    e!("ntgl;", '\u{2279}'),
    e!("ntilde", '\u{F1}'),
    e!("ntilde;", '\u{F1}'),
    e!("ntlg;", '\u{2278}'),
    e!("ntriangleleft;", '\u{22EA}'),
    e!("ntrianglelefteq;", '\u{22EC}'),
    e!("ntriangleright;", '\u{22EB}'),
    e!("ntrianglerighteq;", '\u{22ED}'),
    e!("nu;", '\u{3BD}'),
    e!("num;", '\u{23}'),
    e!("numero;", '\u{2116}'),
    e!("numsp;", '\u{2007}'),
    e!("nvDash;", '\u{22AD}'),
    e!("nvHarr;", '\u{2904}'),
    e!("nvap;", '\u{224D}', '\u{20D2}'),
    e!("nvdash;", '\u{22AC}'),
    e!("nvge;", '\u{2265}', '\u{20D2}'),
    e!("nvgt;", '\u{3E}', '\u{20D2}'),
    e!("nvinfin;", '\u{29DE}'),
    e!("nvlArr;", '\u{2902}'),
    e!("nvle;", '\u{2264}', '\u{20D2}'),
    e!("nvlt;", '\u{3C}', '\u{20D2}'),
    e!("nvltrie;", '\u{22B4}', '\u{20D2}'),
    e!("nvrArr;", '\u{2903}'),
    e!("nvrtrie;", '\u{22B5}', '\u{20D2}'),
    e!("nvsim;", '\u{223C}', '\u{20D2}'),
    e!("nwArr;", '\u{21D6}'),
    e!("nwarhk;", '\u{2923}'),
    e!("nwarr;", '\u{2196}'),
    e!("nwarrow;", '\u{2196}'),
    e!("nwnear;", '\u{2927}'),
    e!("oS;", '\u{24C8}'),
    e!("oacute", '\u{F3}'),
    e!("oacute;", '\u{F3}'),
    e!("oast;", '\u{229B}'),
    e!("ocir;", '\u{229A}'),
    e!("ocirc", '\u{F4}'),
    e!("ocirc;", '\u{F4}'),
    e!("ocy;", '\u{43E}'),
    e!("odash;", '\u{229D}'),
    e!("odblac;", '\u{151}'),
    e!("odiv;", '\u{2A38}'),
    e!("odot;", '\u{2299}'),
    e!("odsold;", '\u{29BC}'),
    e!("oelig;", '\u{153}'),
    e!("ofcir;", '\u{29BF}'),
    e!("ofr;", '\u{1D52C}'),
    e!("ogon;", '\u{2DB}'),
    e!("ograve", '\u{F2}'),
    e!("ograve;", '\u{F2}'),
    e!("ogt;", '\u{29C1}'),
    e!("ohbar;", '\u{29B5}'),
    e!("ohm;", '\u{3A9}'),
    e!("oint;", '\u{222E}'),
    e!("olarr;", '\u{21BA}'),
    e!("olcir;", '\u{29BE}'),
    e!("olcross;", '\u{29BB}'),
    e!("oline;", '\u{203E}'),
    e!("olt;", '\u{29C0}'),
    e!("omacr;", '\u{14D}'),
    e!("omega;", '\u{3C9}'),
    e!("omicron;", '\u{3BF}'),
    e!("omid;", '\u{29B6}'),
    e!("ominus;", '\u{2296}'),
    e!("oopf;", '\u{1D560}'),
    e!("opar;", '\u{29B7}'),
    e!("operp;", '\u{29B9}'),
    e!("oplus;", '\u{2295}'),
    e!("or;", '\u{2228}'),
    e!("orarr;", '\u{21BB}'),
    e!("ord;", '\u{2A5D}'),
    e!("order;", '\u{2134}'),
    e!("orderof;", '\u{2134}'),
    e!("ordf", '\u{AA}'),
    e!("ordf;", '\u{AA}'),
    e!("ordm", '\u{BA}'),
    e!("ordm;", '\u{BA}'),
    e!("origof;", '\u{22B6}'),
    e!("oror;", '\u{2A56}'),
    e!("orslope;", '\u{2A57}'),
    e!("orv;", '\u{2A5B}'),
    e!("oscr;", '\u{2134}'),
    e!("oslash", '\u{F8}'),
    e!("oslash;", '\u{F8}'),
    e!("osol;", '\u{2298}'),
    e!("otilde", '\u{F5}'),
    e!("otilde;", '\u{F5}'),
    e!("otimes;", '\u{2297}'),
    e!("otimesas;", '\u{2A36}'),
    e!("ouml", '\u{F6}'),
    e!("ouml;", '\u{F6}'),
    e!("ovbar;", '\u{233D}'),
    e!("par;", '\u{2225}'),
    e!("para", '\u{B6}'),
    e!("para;", '\u{B6}'),
    e!("parallel;", '\u{2225}'),
    e!("parsim;", '\u{2AF3}'),
    e!("parsl;", '\u{2AFD}'),
    e!("part;", '\u{2202}'),
    e!("pcy;", '\u{43F}'),
    e!("percnt;", '\u{25}'),
    e!("period;", '\u{2E}'),
    e!("permil;", '\u{2030}'),
    e!("perp;", '\u{22A5}'),
    e!("pertenk;", '\u{2031}'),
    e!("pfr;", '\u{1D52D}'),
    e!("phi;", '\u{3C6}'),
    e!("phiv;", '\u{3D5}'),
    e!("phmmat;", '\u{2133}'),
    e!("phone;", '\u{260E}'),
    e!("pi;", '\u{3C0}'),
    e!("pitchfork;", '\u{22D4}'),
    e!("piv;", '\u{3D6}'),
    e!("planck;", '\u{210F}'),
    e!("planckh;", '\u{210E}'),
    e!("plankv;", '\u{210F}'),
    e!("plus;", '\u{2B}'),
    e!("plusacir;", '\u{2A23}'),
    e!("plusb;", '\u{229E}'),
    e!("pluscir;", '\u{2A22}'),
    e!("plusdo;", '\u{2214}'),
    e!("plusdu;", '\u{2A25}'),
    e!("pluse;", '\u{2A72}'),
    e!("plusmn", '\u{B1}'),
    e!("plusmn;", '\u{B1}'),
    e!("plussim;", '\u{2A26}'),
    e!("plustwo;", '\u{2A27}'),
    e!("pm;", '\u{B1}'),
    e!("pointint;", '\u{2A15}'),
    e!("popf;", '\u{1D561}'),
    e!("pound", '\u{A3}'),
    e!("pound;", '\u{A3}'),
    e!("pr;", '\u{227A}'),
    e!("prE;", '\u{2AB3}'),
    e!("prap;", '\u{2AB7}'),
    e!("prcue;", '\u{227C}'),
    e!("pre;", '\u{2AAF}'),
    e!("prec;", '\u{227A}'),
    e!("precapprox;", '\u{2AB7}'),
    e!("preccurlyeq;", '\u{227C}'),
    e!("preceq;", '\u{2AAF}'),
    e!("precnapprox;", '\u{2AB9}'),
    e!("precneqq;", '\u{2AB5}'),
    e!("precnsim;", '\u{22E8}'),
    e!("precsim;", '\u{227E}'),
    e!("prime;", '\u{2032}'),
    e!("primes;", '\u{2119}'),
    e!("prnE;", '\u{2AB5}'),
    e!("prnap;", '\u{2AB9}'),
    e!("prnsim;", '\u{22E8}'),
    e!("prod;", '\u{220F}'),
    e!("profalar;", '\u{232E}'),
    e!("profline;", '\u{2312}'),
    e!("profsurf;", '\u{2313}'),
    e!("prop;", '\u{221D}'),
    e!("propto;", '\u{221D}'),
    e!("prsim;", '\u{227E}'),
    e!("prurel;", '\u{22B0}'),
    e!("pscr;", '\u{1D4C5}'),
    e!("psi;", '\u{3C8}'),
    e!("puncsp;", '\u{2008}'),
    e!("qfr;", '\u{1D52E}'),
    e!("qint;", '\u{2A0C}'),
    e!("qopf;", '\u{1D562}'),
    e!("qprime;", '\u{2057}'),
    e!("qscr;", '\u{1D4C6}'),
    e!("quaternions;", '\u{210D}'),
    e!("quatint;", '\u{2A16}'),
    e!("quest;", '\u{3F}'),
    e!("questeq;", '\u{225F}'),
    e!("quot", '\u{22}'),
    e!("quot;", '\u{22}'),
    e!("rAarr;", '\u{21DB}'),
    e!("rArr;", '\u{21D2}'),
    e!("rAtail;", '\u{291C}'),
    e!("rBarr;", '\u{290F}'),
    e!("rHar;", '\u{2964}'),
    e!("race;", '\u{223D}', '\u{331}'),
    e!("racute;", '\u{155}'),
    e!("radic;", '\u{221A}'),
    e!("raemptyv;", '\u{29B3}'),
    e!("rang;", '\u{27E9}'),
    e!("rangd;", '\u{2992}'),
    e!("range;", '\u{29A5}'),
    e!("rangle;", '\u{27E9}'),
    e!("raquo", '\u{BB}'),
    e!("raquo;", '\u{BB}'),
    e!("rarr;", '\u{2192}'),
    e!("rarrap;", '\u{2975}'),
    e!("rarrb;", '\u{21E5}'),
    e!("rarrbfs;", '\u{2920}'),
    e!("rarrc;", '\u{2933}'),
    e!("rarrfs;", '\u{291E}'),
    e!("rarrhk;", '\u{21AA}'),
    e!("rarrlp;", '\u{21AC}'),
    e!("rarrpl;", '\u{2945}'),
    e!("rarrsim;", '\u{2974}'),
    e!("rarrtl;", '\u{21A3}'),
    e!("rarrw;", '\u{219D}'),
    e!("ratail;", '\u{291A}'),
    e!("ratio;", '\u{2236}'),
    e!("rationals;", '\u{211A}'),
    e!("rbarr;", '\u{290D}'),
    e!("rbbrk;", '\u{2773}'),
    e!("rbrace;", '\u{7D}'),
    e!("rbrack;", '\u{5D}'),
    e!("rbrke;", '\u{298C}'),
    e!("rbrksld;", '\u{298E}'),
    e!("rbrkslu;", '\u{2990}'),
    e!("rcaron;", '\u{159}'),
    e!("rcedil;", '\u{157}'),
    e!("rceil;", '\u{2309}'),
    e!("rcub;", '\u{7D}'),
    e!("rcy;", '\u{440}'),
    e!("rdca;", '\u{2937}'),
    e!("rdldhar;", '\u{2969}'),
    e!("rdquo;", '\u{201D}'),
    e!("rdquor;", '\u{201D}'),
    e!("rdsh;", '\u{21B3}'),
    e!("real;", '\u{211C}'),
    e!("realine;", '\u{211B}'),
    e!("realpart;", '\u{211C}'),
    e!("reals;", '\u{211D}'),
    e!("rect;", '\u{25AD}'),
    e!("reg", '\u{AE}'),
    e!("reg;", '\u{AE}'),
    e!("rfisht;", '\u{297D}'),
    e!("rfloor;", '\u{230B}'),
    e!("rfr;", '\u{1D52F}'),
    e!("rhard;", '\u{21C1}'),
    e!("rharu;", '\u{21C0}'),
    e!("rharul;", '\u{296C}'),
    e!("rho;", '\u{3C1}'),
    e!("rhov;", '\u{3F1}'),
    e!("rightarrow;", '\u{2192}'),
    e!("rightarrowtail;", '\u{21A3}'),
    e!("rightharpoondown;", '\u{21C1}'),
    e!("rightharpoonup;", '\u{21C0}'),
    e!("rightleftarrows;", '\u{21C4}'),
    e!("rightleftharpoons;", '\u{21CC}'),
    e!("rightrightarrows;", '\u{21C9}'),
    e!("rightsquigarrow;", '\u{219D}'),
    e!("rightthreetimes;", '\u{22CC}'),
    e!("ring;", '\u{2DA}'),
    e!("risingdotseq;", '\u{2253}'),
    e!("rlarr;", '\u{21C4}'),
    e!("rlhar;", '\u{21CC}'),
    e!("rlm;", '\u{200F}'),
    e!("rmoust;", '\u{23B1}'),
    e!("rmoustache;", '\u{23B1}'),
    e!("rnmid;", '\u{2AEE}'),
    e!("roang;", '\u{27ED}'),
    e!("roarr;", '\u{21FE}'),
    e!("robrk;", '\u{27E7}'),
    e!("ropar;", '\u{2986}'),
    e!("ropf;", '\u{1D563}'),
    e!("roplus;", '\u{2A2E}'),
    e!("rotimes;", '\u{2A35}'),
    e!("rpar;", '\u{29}'),
    e!("rpargt;", '\u{2994}'),
    e!("rppolint;", '\u{2A12}'),
    e!("rrarr;", '\u{21C9}'),
    e!("rsaquo;", '\u{203A}'),
    e!("rscr;", '\u{1D4C7}'),
    e!("rsh;", '\u{21B1}'),
    e!("rsqb;", '\u{5D}'),
    e!("rsquo;", '\u{2019}'),
    e!("rsquor;", '\u{2019}'),
    e!("rthree;", '\u{22CC}'),
    e!("rtimes;", '\u{22CA}'),
    e!("rtri;", '\u{25B9}'),
    e!("rtrie;", '\u{22B5}'),
    e!("rtrif;", '\u{25B8}'),
    e!("rtriltri;", '\u{29CE}'),
    e!("ruluhar;", '\u{2968}'),
    e!("rx;", '\u{211E}'),
    e!("sacute;", '\u{15B}'),
    e!("sbquo;", '\u{201A}'),
    e!("sc;", '\u{227B}'),
    e!("scE;", '\u{2AB4}'),
    e!("scap;", '\u{2AB8}'),
    e!("scaron;", '\u{161}'),
    e!("sccue;", '\u{227D}'),
    e!("sce;", '\u{2AB0}'),
    e!("scedil;", '\u{15F}'),
    e!("scirc;", '\u{15D}'),
    e!("scnE;", '\u{2AB6}'),
    e!("scnap;", '\u{2ABA}'),
    e!("scnsim;", '\u{22E9}'),
    e!("scpolint;", '\u{2A13}'),
    e!("scsim;", '\u{227F}'),
    e!("scy;", '\u{441}'),
    e!("sdot;", '\u{22C5}'),
    e!("sdotb;", '\u{22A1}'),
    e!("sdote;", '\u{2A66}'),
    e!("seArr;", '\u{21D8}'),
    e!("searhk;", '\u{2925}'),
    e!("searr;", '\u{2198}'),
    e!("searrow;", '\u{2198}'),
    e!("sect", '\u{A7}'),
    e!("sect;", '\u{A7}'),
    e!("semi;", '\u{3B}'),
    e!("seswar;", '\u{2929}'),
    e!("setminus;", '\u{2216}'),
    e!("setmn;", '\u{2216}'),
    e!("sext;", '\u{2736}'),
    e!("sfr;", '\u{1D530}'),
    e!("sfrown;", '\u{2322}'),
    e!("sharp;", '\u{266F}'),
    e!("shchcy;", '\u{449}'),
    e!("shcy;", '\u{448}'),
    e!("shortmid;", '\u{2223}'),
    e!("shortparallel;", '\u{2225}'),
    e!("shy", '\u{AD}'),
    e!("shy;", '\u{AD}'),
    e!("sigma;", '\u{3C3}'),
    e!("sigmaf;", '\u{3C2}'),
    e!("sigmav;", '\u{3C2}'),
    e!("sim;", '\u{223C}'),
    e!("simdot;", '\u{2A6A}'),
    e!("sime;", '\u{2243}'),
    e!("simeq;", '\u{2243}'),
    e!("simg;", '\u{2A9E}'),
    e!("simgE;", '\u{2AA0}'),
    e!("siml;", '\u{2A9D}'),
    e!("simlE;", '\u{2A9F}'),
    e!("simne;", '\u{2246}'),
    e!("simplus;", '\u{2A24}'),
    e!("simrarr;", '\u{2972}'),
    e!("slarr;", '\u{2190}'),
    e!("smallsetminus;", '\u{2216}'),
    e!("smashp;", '\u{2A33}'),
    e!("smeparsl;", '\u{29E4}'),
    e!("smid;", '\u{2223}'),
    e!("smile;", '\u{2323}'),
    e!("smt;", '\u{2AAA}'),
    e!("smte;", '\u{2AAC}'),
    e!("smtes;", '\u{2AAC}', '\u{FE00}'),
    e!("softcy;", '\u{44C}'),
    e!("sol;", '\u{2F}'),
    e!("solb;", '\u{29C4}'),
    e!("solbar;", '\u{233F}'),
    e!("sopf;", '\u{1D564}'),
    e!("spades;", '\u{2660}'),
    e!("spadesuit;", '\u{2660}'),
    e!("spar;", '\u{2225}'),
    e!("sqcap;", '\u{2293}'),
    e!("sqcaps;", '\u{2293}', '\u{FE00}'),
    e!("sqcup;", '\u{2294}'),
    e!("sqcups;", '\u{2294}', '\u{FE00}'),
    e!("sqsub;", '\u{228F}'),
    e!("sqsube;", '\u{2291}'),
    e!("sqsubset;", '\u{228F}'),
    e!("sqsubseteq;", '\u{2291}'),
    e!("sqsup;", '\u{2290}'),
    e!("sqsupe;", '\u{2292}'),
    e!("sqsupset;", '\u{2290}'),
    e!("sqsupseteq;", '\u{2292}'),
    e!("squ;", '\u{25A1}'),
    e!("square;", '\u{25A1}'),
    e!("squarf;", '\u{25AA}'),
    e!("squf;", '\u{25AA}'),
    e!("srarr;", '\u{2192}'),
    e!("sscr;", '\u{1D4C8}'),
    e!("ssetmn;", '\u{2216}'),
    e!("ssmile;", '\u{2323}'),
    e!("sstarf;", '\u{22C6}'),
    e!("star;", '\u{2606}'),
    e!("starf;", '\u{2605}'),
    e!("straightepsilon;", '\u{3F5}'),
    e!("straightphi;", '\u{3D5}'),
    e!("strns;", '\u{AF}'),
    e!("sub;", '\u{2282}'),
    e!("subE;", '\u{2AC5}'),
    e!("subdot;", '\u{2ABD}'),
    e!("sube;", '\u{2286}'),
    e!("subedot;", '\u{2AC3}'),
    e!("submult;", '\u{2AC1}'),
    e!("subnE;", '\u{2ACB}'),
    e!("subne;", '\u{228A}'),
    e!("subplus;", '\u{2ABF}'),
    e!("subrarr;", '\u{2979}'),
    e!("subset;", '\u{2282}'),
    e!("subseteq;", '\u{2286}'),
    e!("subseteqq;", '\u{2AC5}'),
    e!("subsetneq;", '\u{228A}'),
    e!("subsetneqq;", '\u{2ACB}'),
    e!("subsim;", '\u{2AC7}'),
    e!("subsub;", '\u{2AD5}'),
    e!("subsup;", '\u{2AD3}'),
    e!("succ;", '\u{227B}'),
    e!("succapprox;", '\u{2AB8}'),
    e!("succcurlyeq;", '\u{227D}'),
    e!("succeq;", '\u{2AB0}'),
    e!("succnapprox;", '\u{2ABA}'),
    e!("succneqq;", '\u{2AB6}'),
    e!("succnsim;", '\u{22E9}'),
    e!("succsim;", '\u{227F}'),
    e!("sum;", '\u{2211}'),
    e!("sung;", '\u{266A}'),
    e!("sup1", '\u{B9}'),
    e!("sup1;", '\u{B9}'),
    e!("sup2", '\u{B2}'),
    e!("sup2;", '\u{B2}'),
    e!("sup3", '\u{B3}'),
    e!("sup3;", '\u{B3}'),
    e!("sup;", '\u{2283}'),
    e!("supE;", '\u{2AC6}'),
    e!("supdot;", '\u{2ABE}'),
    e!("supdsub;", '\u{2AD8}'),
    e!("supe;", '\u{2287}'),
    e!("supedot;", '\u{2AC4}'),
    e!("suphsol;", '\u{27C9}'),
    e!("suphsub;", '\u{2AD7}'),
    e!("suplarr;", '\u{297B}'),
    e!("supmult;", '\u{2AC2}'),
    e!("supnE;", '\u{2ACC}'),
    e!("supne;", '\u{228B}'),
    e!("supplus;", '\u{2AC0}'),
    e!("supset;", '\u{2283}'),
    e!("supseteq;", '\u{2287}'),
    e!("supseteqq;", '\u{2AC6}'),
    e!("supsetneq;", '\u{228B}'),
    e!("supsetneqq;", '\u{2ACC}'),
    e!("supsim;", '\u{2AC8}'),
    e!("supsub;", '\u{2AD4}'),
    e!("supsup;", '\u{2AD6}'),
    e!("swArr;", '\u{21D9}'),
    e!("swarhk;", '\u{2926}'),
    e!("swarr;", '\u{2199}'),
    e!("swarrow;", '\u{2199}'),
    e!("swnwar;", '\u{292A}'),
    e!("szlig", '\u{DF}'),
    e!("szlig;", '\u{DF}'),
    e!("target;", '\u{2316}'),
    e!("tau;", '\u{3C4}'),
    e!("tbrk;", '\u{23B4}'),
    e!("tcaron;", '\u{165}'),
    e!("tcedil;", '\u{163}'),
    e!("tcy;", '\u{442}'),
    e!("tdot;", '\u{20DB}'),
    e!("telrec;", '\u{2315}'),
    e!("tfr;", '\u{1D531}'),
    e!("there4;", '\u{2234}'),
    e!("therefore;", '\u{2234}'),
    e!("theta;", '\u{3B8}'),
    e!("thetasym;", '\u{3D1}'),
    e!("thetav;", '\u{3D1}'),
    e!("thickapprox;", '\u{2248}'),
    e!("thicksim;", '\u{223C}'),
    e!("thinsp;", '\u{2009}'),
    e!("thkap;", '\u{2248}'),
    e!("thksim;", '\u{223C}'),
    e!("thorn", '\u{FE}'),
    e!("thorn;", '\u{FE}'),
    e!("tilde;", '\u{2DC}'),
    e!("times", '\u{D7}'),
    e!("times;", '\u{D7}'),
    e!("timesb;", '\u{22A0}'),
    e!("timesbar;", '\u{2A31}'),
    e!("timesd;", '\u{2A30}'),
    e!("tint;", '\u{222D}'),
    e!("toea;", '\u{2928}'),
    e!("top;", '\u{22A4}'),
    e!("topbot;", '\u{2336}'),
    e!("topcir;", '\u{2AF1}'),
    e!("topf;", '\u{1D565}'),
    e!("topfork;", '\u{2ADA}'),
    e!("tosa;", '\u{2929}'),
    e!("tprime;", '\u{2034}'),
    e!("trade;", '\u{2122}'),
    e!("triangle;", '\u{25B5}'),
    e!("triangledown;", '\u{25BF}'),
    e!("triangleleft;", '\u{25C3}'),
    e!("trianglelefteq;", '\u{22B4}'),
    e!("triangleq;", '\u{225C}'),
    e!("triangleright;", '\u{25B9}'),
    e!("trianglerighteq;", '\u{22B5}'),
    e!("tridot;", '\u{25EC}'),
    e!("trie;", '\u{225C}'),
    e!("triminus;", '\u{2A3A}'),
    e!("triplus;", '\u{2A39}'),
    e!("trisb;", '\u{29CD}'),
    e!("tritime;", '\u{2A3B}'),
    e!("trpezium;", '\u{23E2}'),
    e!("tscr;", '\u{1D4C9}'),
    e!("tscy;", '\u{446}'),
    e!("tshcy;", '\u{45B}'),
    e!("tstrok;", '\u{167}'),
    e!("twixt;", '\u{226C}'),
    e!("twoheadleftarrow;", '\u{219E}'),
    e!("twoheadrightarrow;", '\u{21A0}'),
    e!("uArr;", '\u{21D1}'),
    e!("uHar;", '\u{2963}'),
    e!("uacute", '\u{FA}'),
    e!("uacute;", '\u{FA}'),
    e!("uarr;", '\u{2191}'),
    e!("ubrcy;", '\u{45E}'),
    e!("ubreve;", '\u{16D}'),
    e!("ucirc", '\u{FB}'),
    e!("ucirc;", '\u{FB}'),
    e!("ucy;", '\u{443}'),
    e!("udarr;", '\u{21C5}'),
    e!("udblac;", '\u{171}'),
    e!("udhar;", '\u{296E}'),
    e!("ufisht;", '\u{297E}'),
    e!("ufr;", '\u{1D532}'),
    e!("ugrave", '\u{F9}'),
    e!("ugrave;", '\u{F9}'),
    e!("uharl;", '\u{21BF}'),
    e!("uharr;", '\u{21BE}'),
    e!("uhblk;", '\u{2580}'),
    e!("ulcorn;", '\u{231C}'),
    e!("ulcorner;", '\u{231C}'),
    e!("ulcrop;", '\u{230F}'),
    e!("ultri;", '\u{25F8}'),
    e!("umacr;", '\u{16B}'),
    e!("uml", '\u{A8}'),
    e!("uml;", '\u{A8}'),
    e!("uogon;", '\u{173}'),
    e!("uopf;", '\u{1D566}'),
    e!("uparrow;", '\u{2191}'),
    e!("updownarrow;", '\u{2195}'),
    e!("upharpoonleft;", '\u{21BF}'),
    e!("upharpoonright;", '\u{21BE}'),
    e!("uplus;", '\u{228E}'),
    e!("upsi;", '\u{3C5}'),
    e!("upsih;", '\u{3D2}'),
    e!("upsilon;", '\u{3C5}'),
    e!("upuparrows;", '\u{21C8}'),
    e!("urcorn;", '\u{231D}'),
    e!("urcorner;", '\u{231D}'),
    e!("urcrop;", '\u{230E}'),
    e!("uring;", '\u{16F}'),
    e!("urtri;", '\u{25F9}'),
    e!("uscr;", '\u{1D4CA}'),
    e!("utdot;", '\u{22F0}'),
    e!("utilde;", '\u{169}'),
    e!("utri;", '\u{25B5}'),
    e!("utrif;", '\u{25B4}'),
    e!("uuarr;", '\u{21C8}'),
    e!("uuml", '\u{FC}'),
    e!("uuml;", '\u{FC}'),
    e!("uwangle;", '\u{29A7}'),
    e!("vArr;", '\u{21D5}'),
    e!("vBar;", '\u{2AE8}'),
    e!("vBarv;", '\u{2AE9}'),
    e!("vDash;", '\u{22A8}'),
    e!("vangrt;", '\u{299C}'),
    e!("varepsilon;", '\u{3F5}'),
    e!("varkappa;", '\u{3F0}'),
    e!("varnothing;", '\u{2205}'),
    e!("varphi;", '\u{3D5}'),
    e!("varpi;", '\u{3D6}'),
    e!("varpropto;", '\u{221D}'),
    e!("varr;", '\u{2195}'),
    e!("varrho;", '\u{3F1}'),
    e!("varsigma;", '\u{3C2}'),
    e!("varsubsetneq;", '\u{228A}', '\u{FE00}'),
    e!("varsubsetneqq;", '\u{2ACB}', '\u{FE00}'),
    e!("varsupsetneq;", '\u{228B}', '\u{FE00}'),
    e!("varsupsetneqq;", '\u{2ACC}', '\u{FE00}'),
    e!("vartheta;", '\u{3D1}'),
    e!("vartriangleleft;", '\u{22B2}'),
    e!("vartriangleright;", '\u{22B3}'),
    e!("vcy;", '\u{432}'),
    e!("vdash;", '\u{22A2}'),
    e!("vee;", '\u{2228}'),
    e!("veebar;", '\u{22BB}'),
    e!("veeeq;", '\u{225A}'),
    e!("vellip;", '\u{22EE}'),
    e!("verbar;", '\u{7C}'),
    e!("vert;", '\u{7C}'),
    e!("vfr;", '\u{1D533}'),
    e!("vltri;", '\u{22B2}'),
    e!("vnsub;", '\u{2282}', '\u{20D2}'),
    e!("vnsup;", '\u{2283}', '\u{20D2}'),
    e!("vopf;", '\u{1D567}'),
    e!("vprop;", '\u{221D}'),
    e!("vrtri;", '\u{22B3}'),
    e!("vscr;", '\u{1D4CB}'),
    e!("vsubnE;", '\u{2ACB}', '\u{FE00}'),
    e!("vsubne;", '\u{228A}', '\u{FE00}'),
    e!("vsupnE;", '\u{2ACC}', '\u{FE00}'),
    e!("vsupne;", '\u{228B}', '\u{FE00}'),
    e!("vzigzag;", '\u{299A}'),
    e!("wcirc;", '\u{175}'),
    e!("wedbar;", '\u{2A5F}'),
    e!("wedge;", '\u{2227}'),
    e!("wedgeq;", '\u{2259}'),
    e!("weierp;", '\u{2118}'),
    e!("wfr;", '\u{1D534}'),
    e!("wopf;", '\u{1D568}'),
    e!("wp;", '\u{2118}'),
    e!("wr;", '\u{2240}'),
    e!("wreath;", '\u{2240}'),
    e!("wscr;", '\u{1D4CC}'),
    e!("xcap;", '\u{22C2}'),
    e!("xcirc;", '\u{25EF}'),
    e!("xcup;", '\u{22C3}'),
    e!("xdtri;", '\u{25BD}'),
    e!("xfr;", '\u{1D535}'),
    e!("xhArr;", '\u{27FA}'),
    e!("xharr;", '\u{27F7}'),
    e!("xi;", '\u{3BE}'),
    e!("xlArr;", '\u{27F8}'),
    e!("xlarr;", '\u{27F5}'),
    e!("xmap;", '\u{27FC}'),
    e!("xnis;", '\u{22FB}'),
    e!("xodot;", '\u{2A00}'),
    e!("xopf;", '\u{1D569}'),
    e!("xoplus;", '\u{2A01}'),
    e!("xotime;", '\u{2A02}'),
    e!("xrArr;", '\u{27F9}'),
    e!("xrarr;", '\u{27F6}'),
    e!("xscr;", '\u{1D4CD}'),
    e!("xsqcup;", '\u{2A06}'),
    e!("xuplus;", '\u{2A04}'),
    e!("xutri;", '\u{25B3}'),
    e!("xvee;", '\u{22C1}'),
    e!("xwedge;", '\u{22C0}'),
    e!("yacute", '\u{FD}'),
    e!("yacute;", '\u{FD}'),
    e!("yacy;", '\u{44F}'),
    e!("ycirc;", '\u{177}'),
    e!("ycy;", '\u{44B}'),
    e!("yen", '\u{A5}'),
    e!("yen;", '\u{A5}'),
    e!("yfr;", '\u{1D536}'),
    e!("yicy;", '\u{457}'),
    e!("yopf;", '\u{1D56A}'),
    e!("yscr;", '\u{1D4CE}'),
    e!("yucy;", '\u{44E}'),
    e!("yuml", '\u{FF}'),
    e!("yuml;", '\u{FF}'),
    e!("zacute;", '\u{17A}'),
    e!("zcaron;", '\u{17E}'),
    e!("zcy;", '\u{437}'),
    e!("zdot;", '\u{17C}'),
    e!("zeetrf;", '\u{2128}'),
    e!("zeta;", '\u{3B6}'),
    e!("zfr;", '\u{1D537}'),
    e!("zhcy;", '\u{436}'),
    e!("zigrarr;", '\u{21DD}'),
    e!("zopf;", '\u{1D56B}'),
    e!("zscr;", '\u{1D4CF}'),
    e!("zwj;", '\u{200D}'),
    e!("zwnj;", '\u{200C}'),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_the_standard_entry_counts() {
        assert_eq!(ENTITIES.len(), 2231);
        let legacy = ENTITIES
            .iter()
            .filter(|e| !e.ends_with_semicolon())
            .count();
        assert_eq!(legacy, 106);
        let two_scalar = ENTITIES.iter().filter(|e| e.chars[1] != '\0').count();
        assert_eq!(two_scalar, 93);
    }

    #[test]
    fn index_is_buildable_and_duplicate_free() {
        // Duplicate names would make the binary-search view ambiguous; the
        // builder debug_asserts on them.
        let index = sorted_index();
        assert_eq!(index.len(), ENTITIES.len());
    }

    #[test]
    fn exact_lookup_resolves_semicolon_and_legacy_forms() {
        assert_eq!(lookup("amp;").unwrap().chars[0], '&');
        assert_eq!(lookup("amp").unwrap().chars[0], '&');
        assert_eq!(lookup("nbsp").unwrap().chars[0], '\u{A0}');
        assert!(lookup("bogus;").is_none());
        assert!(lookup("Tab").is_none(), "Tab has no legacy form");
    }

    #[test]
    fn lookup_covers_references_beyond_the_legacy_set() {
        assert_eq!(lookup("frac34;").unwrap().chars[0], '\u{BE}');
        assert_eq!(lookup("hearts;").unwrap().chars[0], '\u{2665}');
        assert_eq!(lookup("there4;").unwrap().chars[0], '\u{2234}');
        assert_eq!(lookup("bigstar;").unwrap().chars[0], '\u{2605}');
        assert_eq!(lookup("Copf;").unwrap().chars[0], '\u{2102}');
        assert_eq!(lookup("checkmark;").unwrap().chars[0], '\u{2713}');
        assert_eq!(
            lookup("CounterClockwiseContourIntegral;").unwrap().chars[0],
            '\u{2233}'
        );
    }

    #[test]
    fn longest_match_prefers_the_longer_name() {
        // "notin;" must not stop at the legacy "not".
        let hit = longest_match("notin; x").unwrap();
        assert_eq!(hit.name, "notin;");
        // Without the semicolon the legacy prefix wins.
        let hit = longest_match("notit").unwrap();
        assert_eq!(hit.name, "not");
        // Semicolon form beats bare form when both are present.
        let hit = longest_match("not;").unwrap();
        assert_eq!(hit.name, "not;");
    }

    #[test]
    fn longest_match_requires_leading_alphanumerics() {
        assert!(longest_match(";x").is_none());
        assert!(longest_match(" amp;").is_none());
        assert!(longest_match("#38;").is_none());
    }

    #[test]
    fn two_scalar_references_expand_in_order() {
        let hit = longest_match("fjlig;").unwrap();
        let got: String = hit.scalars().collect();
        assert_eq!(got, "fj");
        assert!(hit.ends_with_semicolon());

        let hit = longest_match("NotEqualTilde;").unwrap();
        let got: Vec<char> = hit.scalars().collect();
        assert_eq!(got, vec!['\u{2242}', '\u{338}']);
    }

    #[test]
    fn every_legacy_name_has_a_semicolon_twin() {
        for entry in ENTITIES {
            if !entry.ends_with_semicolon() {
                let twin = format!("{};", entry.name);
                let resolved = lookup(&twin).unwrap_or_else(|| {
                    panic!("legacy entity {} lacks semicolon form", entry.name)
                });
                assert_eq!(resolved.chars, entry.chars);
            }
        }
    }

    #[test]
    fn max_name_len_bounds_the_table() {
        for entry in ENTITIES {
            assert!(entry.name.len() <= MAX_NAME_LEN, "{} too long", entry.name);
        }
    }
}
