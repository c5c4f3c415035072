//! Named character references HTML5 adds on top of the HTML 4.01 set.
//!
//! `lang;` and `rang;` are redefined here; the rest are new names. A few
//! names expand to two code points.

pub(super) const REFERENCES: &[(&str, &str)] = &[
    ("Tab;", "\u{0009}"),
    ("NewLine;", "\u{000A}"),
    ("excl;", "\u{0021}"),
    ("QUOT;", "\u{0022}"),
    ("num;", "\u{0023}"),
    ("dollar;", "\u{0024}"),
    ("percnt;", "\u{0025}"),
    ("AMP;", "\u{0026}"),
    ("apos;", "\u{0027}"),
    ("lpar;", "\u{0028}"),
    ("rpar;", "\u{0029}"),
    ("ast;", "\u{002A}"),
    ("midast;", "\u{002A}"),
    ("plus;", "\u{002B}"),
    ("comma;", "\u{002C}"),
    ("period;", "\u{002E}"),
    ("sol;", "\u{002F}"),
    ("colon;", "\u{003A}"),
    ("semi;", "\u{003B}"),
    ("LT;", "\u{003C}"),
    ("nvlt;", "\u{003C}\u{20D2}"),
    ("equals;", "\u{003D}"),
    ("bne;", "\u{003D}\u{20E5}"),
    ("GT;", "\u{003E}"),
    ("nvgt;", "\u{003E}\u{20D2}"),
    ("quest;", "\u{003F}"),
    ("commat;", "\u{0040}"),
    ("lbrack;", "\u{005B}"),
    ("lsqb;", "\u{005B}"),
    ("bsol;", "\u{005C}"),
    ("rbrack;", "\u{005D}"),
    ("rsqb;", "\u{005D}"),
    ("Hat;", "\u{005E}"),
    ("lowbar;", "\u{005F}"),
    ("UnderBar;", "\u{005F}"),
    ("DiacriticalGrave;", "\u{0060}"),
    ("grave;", "\u{0060}"),
    ("fjlig;", "\u{0066}\u{006A}"),
    ("lbrace;", "\u{007B}"),
    ("lcub;", "\u{007B}"),
    ("verbar;", "\u{007C}"),
    ("vert;", "\u{007C}"),
    ("VerticalLine;", "\u{007C}"),
    ("rbrace;", "\u{007D}"),
    ("rcub;", "\u{007D}"),
    ("NonBreakingSpace;", "\u{00A0}"),
    ("die;", "\u{00A8}"),
    ("Dot;", "\u{00A8}"),
    ("DoubleDot;", "\u{00A8}"),
    ("COPY;", "\u{00A9}"),
    ("circledR;", "\u{00AE}"),
    ("REG;", "\u{00AE}"),
    ("strns;", "\u{00AF}"),
    ("PlusMinus;", "\u{00B1}"),
    ("pm;", "\u{00B1}"),
    ("DiacriticalAcute;", "\u{00B4}"),
    ("CenterDot;", "\u{00B7}"),
    ("centerdot;", "\u{00B7}"),
    ("Cedilla;", "\u{00B8}"),
    ("half;", "\u{00BD}"),
    ("angst;", "\u{00C5}"),
    ("div;", "\u{00F7}"),
    ("Amacr;", "\u{0100}"),
    ("amacr;", "\u{0101}"),
    ("Abreve;", "\u{0102}"),
    ("abreve;", "\u{0103}"),
    ("Aogon;", "\u{0104}"),
    ("aogon;", "\u{0105}"),
    ("Cacute;", "\u{0106}"),
    ("cacute;", "\u{0107}"),
    ("Ccirc;", "\u{0108}"),
    ("ccirc;", "\u{0109}"),
    ("Cdot;", "\u{010A}"),
    ("cdot;", "\u{010B}"),
    ("Ccaron;", "\u{010C}"),
    ("ccaron;", "\u{010D}"),
    ("Dcaron;", "\u{010E}"),
    ("dcaron;", "\u{010F}"),
    ("Dstrok;", "\u{0110}"),
    ("dstrok;", "\u{0111}"),
    ("Emacr;", "\u{0112}"),
    ("emacr;", "\u{0113}"),
    ("Edot;", "\u{0116}"),
    ("edot;", "\u{0117}"),
    ("Eogon;", "\u{0118}"),
    ("eogon;", "\u{0119}"),
    ("Ecaron;", "\u{011A}"),
    ("ecaron;", "\u{011B}"),
    ("Gcirc;", "\u{011C}"),
    ("gcirc;", "\u{011D}"),
    ("Gbreve;", "\u{011E}"),
    ("gbreve;", "\u{011F}"),
    ("Gdot;", "\u{0120}"),
    ("gdot;", "\u{0121}"),
    ("Gcedil;", "\u{0122}"),
    ("Hcirc;", "\u{0124}"),
    ("hcirc;", "\u{0125}"),
    ("Hstrok;", "\u{0126}"),
    ("hstrok;", "\u{0127}"),
    ("Itilde;", "\u{0128}"),
    ("itilde;", "\u{0129}"),
    ("Imacr;", "\u{012A}"),
    ("imacr;", "\u{012B}"),
    ("Iogon;", "\u{012E}"),
    ("iogon;", "\u{012F}"),
    ("Idot;", "\u{0130}"),
    ("imath;", "\u{0131}"),
    ("inodot;", "\u{0131}"),
    ("IJlig;", "\u{0132}"),
    ("ijlig;", "\u{0133}"),
    ("Jcirc;", "\u{0134}"),
    ("jcirc;", "\u{0135}"),
    ("Kcedil;", "\u{0136}"),
    ("kcedil;", "\u{0137}"),
    ("kgreen;", "\u{0138}"),
    ("Lacute;", "\u{0139}"),
    ("lacute;", "\u{013A}"),
    ("Lcedil;", "\u{013B}"),
    ("lcedil;", "\u{013C}"),
    ("Lcaron;", "\u{013D}"),
    ("lcaron;", "\u{013E}"),
    ("Lmidot;", "\u{013F}"),
    ("lmidot;", "\u{0140}"),
    ("Lstrok;", "\u{0141}"),
    ("lstrok;", "\u{0142}"),
    ("Nacute;", "\u{0143}"),
    ("nacute;", "\u{0144}"),
    ("Ncedil;", "\u{0145}"),
    ("ncedil;", "\u{0146}"),
    ("Ncaron;", "\u{0147}"),
    ("ncaron;", "\u{0148}"),
    ("napos;", "\u{0149}"),
    ("ENG;", "\u{014A}"),
    ("eng;", "\u{014B}"),
    ("Omacr;", "\u{014C}"),
    ("omacr;", "\u{014D}"),
    ("Odblac;", "\u{0150}"),
    ("odblac;", "\u{0151}"),
    ("Racute;", "\u{0154}"),
    ("racute;", "\u{0155}"),
    ("Rcedil;", "\u{0156}"),
    ("rcedil;", "\u{0157}"),
    ("Rcaron;", "\u{0158}"),
    ("rcaron;", "\u{0159}"),
    ("Sacute;", "\u{015A}"),
    ("sacute;", "\u{015B}"),
    ("Scirc;", "\u{015C}"),
    ("scirc;", "\u{015D}"),
    ("Scedil;", "\u{015E}"),
    ("scedil;", "\u{015F}"),
    ("Tcedil;", "\u{0162}"),
    ("tcedil;", "\u{0163}"),
    ("Tcaron;", "\u{0164}"),
    ("tcaron;", "\u{0165}"),
    ("Tstrok;", "\u{0166}"),
    ("tstrok;", "\u{0167}"),
    ("Utilde;", "\u{0168}"),
    ("utilde;", "\u{0169}"),
    ("Umacr;", "\u{016A}"),
    ("umacr;", "\u{016B}"),
    ("Ubreve;", "\u{016C}"),
    ("ubreve;", "\u{016D}"),
    ("Uring;", "\u{016E}"),
    ("uring;", "\u{016F}"),
    ("Udblac;", "\u{0170}"),
    ("udblac;", "\u{0171}"),
    ("Uogon;", "\u{0172}"),
    ("uogon;", "\u{0173}"),
    ("Wcirc;", "\u{0174}"),
    ("wcirc;", "\u{0175}"),
    ("Ycirc;", "\u{0176}"),
    ("ycirc;", "\u{0177}"),
    ("Zacute;", "\u{0179}"),
    ("zacute;", "\u{017A}"),
    ("Zdot;", "\u{017B}"),
    ("zdot;", "\u{017C}"),
    ("Zcaron;", "\u{017D}"),
    ("zcaron;", "\u{017E}"),
    ("imped;", "\u{01B5}"),
    ("gacute;", "\u{01F5}"),
    ("jmath;", "\u{0237}"),
    ("caron;", "\u{02C7}"),
    ("Hacek;", "\u{02C7}"),
    ("Breve;", "\u{02D8}"),
    ("breve;", "\u{02D8}"),
    ("DiacriticalDot;", "\u{02D9}"),
    ("dot;", "\u{02D9}"),
    ("ring;", "\u{02DA}"),
    ("ogon;", "\u{02DB}"),
    ("DiacriticalTilde;", "\u{02DC}"),
    ("dblac;", "\u{02DD}"),
    ("DiacriticalDoubleAcute;", "\u{02DD}"),
    ("DownBreve;", "\u{0311}"),
    ("ohm;", "\u{03A9}"),
    ("epsi;", "\u{03B5}"),
    ("sigmav;", "\u{03C2}"),
    ("varsigma;", "\u{03C2}"),
    ("upsi;", "\u{03C5}"),
    ("thetav;", "\u{03D1}"),
    ("vartheta;", "\u{03D1}"),
    ("Upsi;", "\u{03D2}"),
    ("phiv;", "\u{03D5}"),
    ("straightphi;", "\u{03D5}"),
    ("varphi;", "\u{03D5}"),
    ("varpi;", "\u{03D6}"),
    ("Gammad;", "\u{03DC}"),
    ("digamma;", "\u{03DD}"),
    ("gammad;", "\u{03DD}"),
    ("kappav;", "\u{03F0}"),
    ("varkappa;", "\u{03F0}"),
    ("rhov;", "\u{03F1}"),
    ("varrho;", "\u{03F1}"),
    ("epsiv;", "\u{03F5}"),
    ("straightepsilon;", "\u{03F5}"),
    ("varepsilon;", "\u{03F5}"),
    ("backepsilon;", "\u{03F6}"),
    ("bepsi;", "\u{03F6}"),
    ("IOcy;", "\u{0401}"),
    ("DJcy;", "\u{0402}"),
    ("GJcy;", "\u{0403}"),
    ("Jukcy;", "\u{0404}"),
    ("DScy;", "\u{0405}"),
    ("Iukcy;", "\u{0406}"),
    ("YIcy;", "\u{0407}"),
    ("Jsercy;", "\u{0408}"),
    ("LJcy;", "\u{0409}"),
    ("NJcy;", "\u{040A}"),
    ("TSHcy;", "\u{040B}"),
    ("KJcy;", "\u{040C}"),
    ("Ubrcy;", "\u{040E}"),
    ("DZcy;", "\u{040F}"),
    ("Acy;", "\u{0410}"),
    ("Bcy;", "\u{0411}"),
    ("Vcy;", "\u{0412}"),
    ("Gcy;", "\u{0413}"),
    ("Dcy;", "\u{0414}"),
    ("IEcy;", "\u{0415}"),
    ("ZHcy;", "\u{0416}"),
    ("Zcy;", "\u{0417}"),
    ("Icy;", "\u{0418}"),
    ("Jcy;", "\u{0419}"),
    ("Kcy;", "\u{041A}"),
    ("Lcy;", "\u{041B}"),
    ("Mcy;", "\u{041C}"),
    ("Ncy;", "\u{041D}"),
    ("Ocy;", "\u{041E}"),
    ("Pcy;", "\u{041F}"),
    ("Rcy;", "\u{0420}"),
    ("Scy;", "\u{0421}"),
    ("Tcy;", "\u{0422}"),
    ("Ucy;", "\u{0423}"),
    ("Fcy;", "\u{0424}"),
    ("KHcy;", "\u{0425}"),
    ("TScy;", "\u{0426}"),
    ("CHcy;", "\u{0427}"),
    ("SHcy;", "\u{0428}"),
    ("SHCHcy;", "\u{0429}"),
    ("HARDcy;", "\u{042A}"),
    ("Ycy;", "\u{042B}"),
    ("SOFTcy;", "\u{042C}"),
    ("Ecy;", "\u{042D}"),
    ("YUcy;", "\u{042E}"),
    ("YAcy;", "\u{042F}"),
    ("acy;", "\u{0430}"),
    ("bcy;", "\u{0431}"),
    ("vcy;", "\u{0432}"),
    ("gcy;", "\u{0433}"),
    ("dcy;", "\u{0434}"),
    ("iecy;", "\u{0435}"),
    ("zhcy;", "\u{0436}"),
    ("zcy;", "\u{0437}"),
    ("icy;", "\u{0438}"),
    ("jcy;", "\u{0439}"),
    ("kcy;", "\u{043A}"),
    ("lcy;", "\u{043B}"),
    ("mcy;", "\u{043C}"),
    ("ncy;", "\u{043D}"),
    ("ocy;", "\u{043E}"),
    ("pcy;", "\u{043F}"),
    ("rcy;", "\u{0440}"),
    ("scy;", "\u{0441}"),
    ("tcy;", "\u{0442}"),
    ("ucy;", "\u{0443}"),
    ("fcy;", "\u{0444}"),
    ("khcy;", "\u{0445}"),
    ("tscy;", "\u{0446}"),
    ("chcy;", "\u{0447}"),
    ("shcy;", "\u{0448}"),
    ("shchcy;", "\u{0449}"),
    ("hardcy;", "\u{044A}"),
    ("ycy;", "\u{044B}"),
    ("softcy;", "\u{044C}"),
    ("ecy;", "\u{044D}"),
    ("yucy;", "\u{044E}"),
    ("yacy;", "\u{044F}"),
    ("iocy;", "\u{0451}"),
    ("djcy;", "\u{0452}"),
    ("gjcy;", "\u{0453}"),
    ("jukcy;", "\u{0454}"),
    ("dscy;", "\u{0455}"),
    ("iukcy;", "\u{0456}"),
    ("yicy;", "\u{0457}"),
    ("jsercy;", "\u{0458}"),
    ("ljcy;", "\u{0459}"),
    ("njcy;", "\u{045A}"),
    ("tshcy;", "\u{045B}"),
    ("kjcy;", "\u{045C}"),
    ("ubrcy;", "\u{045E}"),
    ("dzcy;", "\u{045F}"),
    ("emsp13;", "\u{2004}"),
    ("emsp14;", "\u{2005}"),
    ("numsp;", "\u{2007}"),
    ("puncsp;", "\u{2008}"),
    ("ThinSpace;", "\u{2009}"),
    ("hairsp;", "\u{200A}"),
    ("VeryThinSpace;", "\u{200A}"),
    ("NegativeMediumSpace;", "\u{200B}"),
    ("NegativeThickSpace;", "\u{200B}"),
    ("NegativeThinSpace;", "\u{200B}"),
    ("NegativeVeryThinSpace;", "\u{200B}"),
    ("ZeroWidthSpace;", "\u{200B}"),
    ("dash;", "\u{2010}"),
    ("hyphen;", "\u{2010}"),
    ("horbar;", "\u{2015}"),
    ("Verbar;", "\u{2016}"),
    ("Vert;", "\u{2016}"),
    ("OpenCurlyQuote;", "\u{2018}"),
    ("CloseCurlyQuote;", "\u{2019}"),
    ("rsquor;", "\u{2019}"),
    ("lsquor;", "\u{201A}"),
    ("OpenCurlyDoubleQuote;", "\u{201C}"),
    ("CloseCurlyDoubleQuote;", "\u{201D}"),
    ("rdquor;", "\u{201D}"),
    ("ldquor;", "\u{201E}"),
    ("ddagger;", "\u{2021}"),
    ("bullet;", "\u{2022}"),
    ("nldr;", "\u{2025}"),
    ("mldr;", "\u{2026}"),
    ("pertenk;", "\u{2031}"),
    ("tprime;", "\u{2034}"),
    ("backprime;", "\u{2035}"),
    ("bprime;", "\u{2035}"),
    ("OverBar;", "\u{203E}"),
    ("caret;", "\u{2041}"),
    ("hybull;", "\u{2043}"),
    ("bsemi;", "\u{204F}"),
    ("qprime;", "\u{2057}"),
    ("MediumSpace;", "\u{205F}"),
    ("ThickSpace;", "\u{205F}\u{200A}"),
    ("NoBreak;", "\u{2060}"),
    ("af;", "\u{2061}"),
    ("ApplyFunction;", "\u{2061}"),
    ("InvisibleTimes;", "\u{2062}"),
    ("it;", "\u{2062}"),
    ("ic;", "\u{2063}"),
    ("InvisibleComma;", "\u{2063}"),
    ("tdot;", "\u{20DB}"),
    ("TripleDot;", "\u{20DB}"),
    ("DotDot;", "\u{20DC}"),
    ("complexes;", "\u{2102}"),
    ("Copf;", "\u{2102}"),
    ("incare;", "\u{2105}"),
    ("gscr;", "\u{210A}"),
    ("hamilt;", "\u{210B}"),
    ("HilbertSpace;", "\u{210B}"),
    ("Hscr;", "\u{210B}"),
    ("Hfr;", "\u{210C}"),
    ("Poincareplane;", "\u{210C}"),
    ("Hopf;", "\u{210D}"),
    ("quaternions;", "\u{210D}"),
    ("planckh;", "\u{210E}"),
    ("hbar;", "\u{210F}"),
    ("hslash;", "\u{210F}"),
    ("planck;", "\u{210F}"),
    ("plankv;", "\u{210F}"),
    ("imagline;", "\u{2110}"),
    ("Iscr;", "\u{2110}"),
    ("Ifr;", "\u{2111}"),
    ("Im;", "\u{2111}"),
    ("imagpart;", "\u{2111}"),
    ("lagran;", "\u{2112}"),
    ("Laplacetrf;", "\u{2112}"),
    ("Lscr;", "\u{2112}"),
    ("ell;", "\u{2113}"),
    ("naturals;", "\u{2115}"),
    ("Nopf;", "\u{2115}"),
    ("numero;", "\u{2116}"),
    ("copysr;", "\u{2117}"),
    ("wp;", "\u{2118}"),
    ("Popf;", "\u{2119}"),
    ("primes;", "\u{2119}"),
    ("Qopf;", "\u{211A}"),
    ("rationals;", "\u{211A}"),
    ("realine;", "\u{211B}"),
    ("Rscr;", "\u{211B}"),
    ("Re;", "\u{211C}"),
    ("realpart;", "\u{211C}"),
    ("Rfr;", "\u{211C}"),
    ("reals;", "\u{211D}"),
    ("Ropf;", "\u{211D}"),
    ("rx;", "\u{211E}"),
    ("TRADE;", "\u{2122}"),
    ("integers;", "\u{2124}"),
    ("Zopf;", "\u{2124}"),
    ("mho;", "\u{2127}"),
    ("zeetrf;", "\u{2128}"),
    ("Zfr;", "\u{2128}"),
    ("iiota;", "\u{2129}"),
    ("bernou;", "\u{212C}"),
    ("Bernoullis;", "\u{212C}"),
    ("Bscr;", "\u{212C}"),
    ("Cayleys;", "\u{212D}"),
    ("Cfr;", "\u{212D}"),
    ("escr;", "\u{212F}"),
    ("Escr;", "\u{2130}"),
    ("expectation;", "\u{2130}"),
    ("Fouriertrf;", "\u{2131}"),
    ("Fscr;", "\u{2131}"),
    ("Mellintrf;", "\u{2133}"),
    ("Mscr;", "\u{2133}"),
    ("phmmat;", "\u{2133}"),
    ("order;", "\u{2134}"),
    ("orderof;", "\u{2134}"),
    ("oscr;", "\u{2134}"),
    ("aleph;", "\u{2135}"),
    ("beth;", "\u{2136}"),
    ("gimel;", "\u{2137}"),
    ("daleth;", "\u{2138}"),
    ("CapitalDifferentialD;", "\u{2145}"),
    ("DD;", "\u{2145}"),
    ("dd;", "\u{2146}"),
    ("DifferentialD;", "\u{2146}"),
    ("ee;", "\u{2147}"),
    ("ExponentialE;", "\u{2147}"),
    ("exponentiale;", "\u{2147}"),
    ("ii;", "\u{2148}"),
    ("ImaginaryI;", "\u{2148}"),
    ("frac13;", "\u{2153}"),
    ("frac23;", "\u{2154}"),
    ("frac15;", "\u{2155}"),
    ("frac25;", "\u{2156}"),
    ("frac35;", "\u{2157}"),
    ("frac45;", "\u{2158}"),
    ("frac16;", "\u{2159}"),
    ("frac56;", "\u{215A}"),
    ("frac18;", "\u{215B}"),
    ("frac38;", "\u{215C}"),
    ("frac58;", "\u{215D}"),
    ("frac78;", "\u{215E}"),
    ("LeftArrow;", "\u{2190}"),
    ("leftarrow;", "\u{2190}"),
    ("ShortLeftArrow;", "\u{2190}"),
    ("slarr;", "\u{2190}"),
    ("ShortUpArrow;", "\u{2191}"),
    ("UpArrow;", "\u{2191}"),
    ("uparrow;", "\u{2191}"),
    ("RightArrow;", "\u{2192}"),
    ("rightarrow;", "\u{2192}"),
    ("ShortRightArrow;", "\u{2192}"),
    ("srarr;", "\u{2192}"),
    ("DownArrow;", "\u{2193}"),
    ("downarrow;", "\u{2193}"),
    ("ShortDownArrow;", "\u{2193}"),
    ("LeftRightArrow;", "\u{2194}"),
    ("leftrightarrow;", "\u{2194}"),
    ("UpDownArrow;", "\u{2195}"),
    ("updownarrow;", "\u{2195}"),
    ("varr;", "\u{2195}"),
    ("nwarr;", "\u{2196}"),
    ("nwarrow;", "\u{2196}"),
    ("UpperLeftArrow;", "\u{2196}"),
    ("nearr;", "\u{2197}"),
    ("nearrow;", "\u{2197}"),
    ("UpperRightArrow;", "\u{2197}"),
    ("LowerRightArrow;", "\u{2198}"),
    ("searr;", "\u{2198}"),
    ("searrow;", "\u{2198}"),
    ("LowerLeftArrow;", "\u{2199}"),
    ("swarr;", "\u{2199}"),
    ("swarrow;", "\u{2199}"),
    ("nlarr;", "\u{219A}"),
    ("nleftarrow;", "\u{219A}"),
    ("nrarr;", "\u{219B}"),
    ("nrightarrow;", "\u{219B}"),
    ("rarrw;", "\u{219D}"),
    ("rightsquigarrow;", "\u{219D}"),
    ("nrarrw;", "\u{219D}\u{0338}"),
    ("Larr;", "\u{219E}"),
    ("twoheadleftarrow;", "\u{219E}"),
    ("Uarr;", "\u{219F}"),
    ("Rarr;", "\u{21A0}"),
    ("twoheadrightarrow;", "\u{21A0}"),
    ("Darr;", "\u{21A1}"),
    ("larrtl;", "\u{21A2}"),
    ("leftarrowtail;", "\u{21A2}"),
    ("rarrtl;", "\u{21A3}"),
    ("rightarrowtail;", "\u{21A3}"),
    ("LeftTeeArrow;", "\u{21A4}"),
    ("mapstoleft;", "\u{21A4}"),
    ("mapstoup;", "\u{21A5}"),
    ("UpTeeArrow;", "\u{21A5}"),
    ("map;", "\u{21A6}"),
    ("mapsto;", "\u{21A6}"),
    ("RightTeeArrow;", "\u{21A6}"),
    ("DownTeeArrow;", "\u{21A7}"),
    ("mapstodown;", "\u{21A7}"),
    ("hookleftarrow;", "\u{21A9}"),
    ("larrhk;", "\u{21A9}"),
    ("hookrightarrow;", "\u{21AA}"),
    ("rarrhk;", "\u{21AA}"),
    ("larrlp;", "\u{21AB}"),
    ("looparrowleft;", "\u{21AB}"),
    ("looparrowright;", "\u{21AC}"),
    ("rarrlp;", "\u{21AC}"),
    ("harrw;", "\u{21AD}"),
    ("leftrightsquigarrow;", "\u{21AD}"),
    ("nharr;", "\u{21AE}"),
    ("nleftrightarrow;", "\u{21AE}"),
    ("Lsh;", "\u{21B0}"),
    ("lsh;", "\u{21B0}"),
    ("Rsh;", "\u{21B1}"),
    ("rsh;", "\u{21B1}"),
    ("ldsh;", "\u{21B2}"),
    ("rdsh;", "\u{21B3}"),
    ("cularr;", "\u{21B6}"),
    ("curvearrowleft;", "\u{21B6}"),
    ("curarr;", "\u{21B7}"),
    ("curvearrowright;", "\u{21B7}"),
    ("circlearrowleft;", "\u{21BA}"),
    ("olarr;", "\u{21BA}"),
    ("circlearrowright;", "\u{21BB}"),
    ("orarr;", "\u{21BB}"),
    ("leftharpoonup;", "\u{21BC}"),
    ("LeftVector;", "\u{21BC}"),
    ("lharu;", "\u{21BC}"),
    ("DownLeftVector;", "\u{21BD}"),
    ("leftharpoondown;", "\u{21BD}"),
    ("lhard;", "\u{21BD}"),
    ("RightUpVector;", "\u{21BE}"),
    ("uharr;", "\u{21BE}"),
    ("upharpoonright;", "\u{21BE}"),
    ("LeftUpVector;", "\u{21BF}"),
    ("uharl;", "\u{21BF}"),
    ("upharpoonleft;", "\u{21BF}"),
    ("rharu;", "\u{21C0}"),
    ("rightharpoonup;", "\u{21C0}"),
    ("RightVector;", "\u{21C0}"),
    ("DownRightVector;", "\u{21C1}"),
    ("rhard;", "\u{21C1}"),
    ("rightharpoondown;", "\u{21C1}"),
    ("dharr;", "\u{21C2}"),
    ("downharpoonright;", "\u{21C2}"),
    ("RightDownVector;", "\u{21C2}"),
    ("dharl;", "\u{21C3}"),
    ("downharpoonleft;", "\u{21C3}"),
    ("LeftDownVector;", "\u{21C3}"),
    ("RightArrowLeftArrow;", "\u{21C4}"),
    ("rightleftarrows;", "\u{21C4}"),
    ("rlarr;", "\u{21C4}"),
    ("udarr;", "\u{21C5}"),
    ("UpArrowDownArrow;", "\u{21C5}"),
    ("LeftArrowRightArrow;", "\u{21C6}"),
    ("leftrightarrows;", "\u{21C6}"),
    ("lrarr;", "\u{21C6}"),
    ("leftleftarrows;", "\u{21C7}"),
    ("llarr;", "\u{21C7}"),
    ("upuparrows;", "\u{21C8}"),
    ("uuarr;", "\u{21C8}"),
    ("rightrightarrows;", "\u{21C9}"),
    ("rrarr;", "\u{21C9}"),
    ("ddarr;", "\u{21CA}"),
    ("downdownarrows;", "\u{21CA}"),
    ("leftrightharpoons;", "\u{21CB}"),
    ("lrhar;", "\u{21CB}"),
    ("ReverseEquilibrium;", "\u{21CB}"),
    ("Equilibrium;", "\u{21CC}"),
    ("rightleftharpoons;", "\u{21CC}"),
    ("rlhar;", "\u{21CC}"),
    ("nlArr;", "\u{21CD}"),
    ("nLeftarrow;", "\u{21CD}"),
    ("nhArr;", "\u{21CE}"),
    ("nLeftrightarrow;", "\u{21CE}"),
    ("nrArr;", "\u{21CF}"),
    ("nRightarrow;", "\u{21CF}"),
    ("DoubleLeftArrow;", "\u{21D0}"),
    ("Leftarrow;", "\u{21D0}"),
    ("DoubleUpArrow;", "\u{21D1}"),
    ("Uparrow;", "\u{21D1}"),
    ("DoubleRightArrow;", "\u{21D2}"),
    ("Implies;", "\u{21D2}"),
    ("Rightarrow;", "\u{21D2}"),
    ("DoubleDownArrow;", "\u{21D3}"),
    ("Downarrow;", "\u{21D3}"),
    ("DoubleLeftRightArrow;", "\u{21D4}"),
    ("iff;", "\u{21D4}"),
    ("Leftrightarrow;", "\u{21D4}"),
    ("DoubleUpDownArrow;", "\u{21D5}"),
    ("Updownarrow;", "\u{21D5}"),
    ("vArr;", "\u{21D5}"),
    ("nwArr;", "\u{21D6}"),
    ("neArr;", "\u{21D7}"),
    ("seArr;", "\u{21D8}"),
    ("swArr;", "\u{21D9}"),
    ("lAarr;", "\u{21DA}"),
    ("Lleftarrow;", "\u{21DA}"),
    ("rAarr;", "\u{21DB}"),
    ("Rrightarrow;", "\u{21DB}"),
    ("zigrarr;", "\u{21DD}"),
    ("larrb;", "\u{21E4}"),
    ("LeftArrowBar;", "\u{21E4}"),
    ("rarrb;", "\u{21E5}"),
    ("RightArrowBar;", "\u{21E5}"),
    ("DownArrowUpArrow;", "\u{21F5}"),
    ("duarr;", "\u{21F5}"),
    ("loarr;", "\u{21FD}"),
    ("roarr;", "\u{21FE}"),
    ("hoarr;", "\u{21FF}"),
    ("ForAll;", "\u{2200}"),
    ("comp;", "\u{2201}"),
    ("complement;", "\u{2201}"),
    ("PartialD;", "\u{2202}"),
    ("npart;", "\u{2202}\u{0338}"),
    ("Exists;", "\u{2203}"),
    ("nexist;", "\u{2204}"),
    ("nexists;", "\u{2204}"),
    ("NotExists;", "\u{2204}"),
    ("emptyset;", "\u{2205}"),
    ("emptyv;", "\u{2205}"),
    ("varnothing;", "\u{2205}"),
    ("Del;", "\u{2207}"),
    ("Element;", "\u{2208}"),
    ("in;", "\u{2208}"),
    ("isinv;", "\u{2208}"),
    ("NotElement;", "\u{2209}"),
    ("notinva;", "\u{2209}"),
    ("niv;", "\u{220B}"),
    ("ReverseElement;", "\u{220B}"),
    ("SuchThat;", "\u{220B}"),
    ("notni;", "\u{220C}"),
    ("notniva;", "\u{220C}"),
    ("NotReverseElement;", "\u{220C}"),
    ("Product;", "\u{220F}"),
    ("coprod;", "\u{2210}"),
    ("Coproduct;", "\u{2210}"),
    ("Sum;", "\u{2211}"),
    ("MinusPlus;", "\u{2213}"),
    ("mnplus;", "\u{2213}"),
    ("mp;", "\u{2213}"),
    ("dotplus;", "\u{2214}"),
    ("plusdo;", "\u{2214}"),
    ("Backslash;", "\u{2216}"),
    ("setminus;", "\u{2216}"),
    ("setmn;", "\u{2216}"),
    ("smallsetminus;", "\u{2216}"),
    ("ssetmn;", "\u{2216}"),
    ("compfn;", "\u{2218}"),
    ("SmallCircle;", "\u{2218}"),
    ("Sqrt;", "\u{221A}"),
    ("Proportional;", "\u{221D}"),
    ("propto;", "\u{221D}"),
    ("varpropto;", "\u{221D}"),
    ("vprop;", "\u{221D}"),
    ("angrt;", "\u{221F}"),
    ("angle;", "\u{2220}"),
    ("nang;", "\u{2220}\u{20D2}"),
    ("angmsd;", "\u{2221}"),
    ("measuredangle;", "\u{2221}"),
    ("angsph;", "\u{2222}"),
    ("mid;", "\u{2223}"),
    ("shortmid;", "\u{2223}"),
    ("smid;", "\u{2223}"),
    ("VerticalBar;", "\u{2223}"),
    ("nmid;", "\u{2224}"),
    ("NotVerticalBar;", "\u{2224}"),
    ("nshortmid;", "\u{2224}"),
    ("nsmid;", "\u{2224}"),
    ("DoubleVerticalBar;", "\u{2225}"),
    ("par;", "\u{2225}"),
    ("parallel;", "\u{2225}"),
    ("shortparallel;", "\u{2225}"),
    ("spar;", "\u{2225}"),
    ("NotDoubleVerticalBar;", "\u{2226}"),
    ("npar;", "\u{2226}"),
    ("nparallel;", "\u{2226}"),
    ("nshortparallel;", "\u{2226}"),
    ("nspar;", "\u{2226}"),
    ("wedge;", "\u{2227}"),
    ("vee;", "\u{2228}"),
    ("caps;", "\u{2229}\u{FE00}"),
    ("cups;", "\u{222A}\u{FE00}"),
    ("Integral;", "\u{222B}"),
    ("Int;", "\u{222C}"),
    ("iiint;", "\u{222D}"),
    ("tint;", "\u{222D}"),
    ("conint;", "\u{222E}"),
    ("ContourIntegral;", "\u{222E}"),
    ("oint;", "\u{222E}"),
    ("Conint;", "\u{222F}"),
    ("DoubleContourIntegral;", "\u{222F}"),
    ("Cconint;", "\u{2230}"),
    ("cwint;", "\u{2231}"),
    ("ClockwiseContourIntegral;", "\u{2232}"),
    ("cwconint;", "\u{2232}"),
    ("awconint;", "\u{2233}"),
    ("CounterClockwiseContourIntegral;", "\u{2233}"),
    ("Therefore;", "\u{2234}"),
    ("therefore;", "\u{2234}"),
    ("becaus;", "\u{2235}"),
    ("Because;", "\u{2235}"),
    ("because;", "\u{2235}"),
    ("ratio;", "\u{2236}"),
    ("Colon;", "\u{2237}"),
    ("Proportion;", "\u{2237}"),
    ("dotminus;", "\u{2238}"),
    ("minusd;", "\u{2238}"),
    ("mDDot;", "\u{223A}"),
    ("homtht;", "\u{223B}"),
    ("thicksim;", "\u{223C}"),
    ("thksim;", "\u{223C}"),
    ("Tilde;", "\u{223C}"),
    ("nvsim;", "\u{223C}\u{20D2}"),
    ("backsim;", "\u{223D}"),
    ("bsim;", "\u{223D}"),
    ("race;", "\u{223D}\u{0331}"),
    ("ac;", "\u{223E}"),
    ("mstpos;", "\u{223E}"),
    ("acE;", "\u{223E}\u{0333}"),
    ("acd;", "\u{223F}"),
    ("VerticalTilde;", "\u{2240}"),
    ("wr;", "\u{2240}"),
    ("wreath;", "\u{2240}"),
    ("NotTilde;", "\u{2241}"),
    ("nsim;", "\u{2241}"),
    ("eqsim;", "\u{2242}"),
    ("EqualTilde;", "\u{2242}"),
    ("esim;", "\u{2242}"),
    ("nesim;", "\u{2242}\u{0338}"),
    ("NotEqualTilde;", "\u{2242}\u{0338}"),
    ("sime;", "\u{2243}"),
    ("simeq;", "\u{2243}"),
    ("TildeEqual;", "\u{2243}"),
    ("NotTildeEqual;", "\u{2244}"),
    ("nsime;", "\u{2244}"),
    ("nsimeq;", "\u{2244}"),
    ("TildeFullEqual;", "\u{2245}"),
    ("simne;", "\u{2246}"),
    ("ncong;", "\u{2247}"),
    ("NotTildeFullEqual;", "\u{2247}"),
    ("ap;", "\u{2248}"),
    ("approx;", "\u{2248}"),
    ("thickapprox;", "\u{2248}"),
    ("thkap;", "\u{2248}"),
    ("TildeTilde;", "\u{2248}"),
    ("nap;", "\u{2249}"),
    ("napprox;", "\u{2249}"),
    ("NotTildeTilde;", "\u{2249}"),
    ("ape;", "\u{224A}"),
    ("approxeq;", "\u{224A}"),
    ("apid;", "\u{224B}"),
    ("napid;", "\u{224B}\u{0338}"),
    ("backcong;", "\u{224C}"),
    ("bcong;", "\u{224C}"),
    ("asympeq;", "\u{224D}"),
    ("CupCap;", "\u{224D}"),
    ("nvap;", "\u{224D}\u{20D2}"),
    ("bump;", "\u{224E}"),
    ("Bumpeq;", "\u{224E}"),
    ("HumpDownHump;", "\u{224E}"),
    ("nbump;", "\u{224E}\u{0338}"),
    ("NotHumpDownHump;", "\u{224E}\u{0338}"),
    ("bumpe;", "\u{224F}"),
    ("bumpeq;", "\u{224F}"),
    ("HumpEqual;", "\u{224F}"),
    ("nbumpe;", "\u{224F}\u{0338}"),
    ("NotHumpEqual;", "\u{224F}\u{0338}"),
    ("doteq;", "\u{2250}"),
    ("DotEqual;", "\u{2250}"),
    ("esdot;", "\u{2250}"),
    ("nedot;", "\u{2250}\u{0338}"),
    ("doteqdot;", "\u{2251}"),
    ("eDot;", "\u{2251}"),
    ("efDot;", "\u{2252}"),
    ("fallingdotseq;", "\u{2252}"),
    ("erDot;", "\u{2253}"),
    ("risingdotseq;", "\u{2253}"),
    ("Assign;", "\u{2254}"),
    ("colone;", "\u{2254}"),
    ("coloneq;", "\u{2254}"),
    ("ecolon;", "\u{2255}"),
    ("eqcolon;", "\u{2255}"),
    ("ecir;", "\u{2256}"),
    ("eqcirc;", "\u{2256}"),
    ("circeq;", "\u{2257}"),
    ("cire;", "\u{2257}"),
    ("wedgeq;", "\u{2259}"),
    ("veeeq;", "\u{225A}"),
    ("triangleq;", "\u{225C}"),
    ("trie;", "\u{225C}"),
    ("equest;", "\u{225F}"),
    ("questeq;", "\u{225F}"),
    ("NotEqual;", "\u{2260}"),
    ("Congruent;", "\u{2261}"),
    ("bnequiv;", "\u{2261}\u{20E5}"),
    ("nequiv;", "\u{2262}"),
    ("NotCongruent;", "\u{2262}"),
    ("leq;", "\u{2264}"),
    ("nvle;", "\u{2264}\u{20D2}"),
    ("geq;", "\u{2265}"),
    ("GreaterEqual;", "\u{2265}"),
    ("nvge;", "\u{2265}\u{20D2}"),
    ("lE;", "\u{2266}"),
    ("leqq;", "\u{2266}"),
    ("LessFullEqual;", "\u{2266}"),
    ("nlE;", "\u{2266}\u{0338}"),
    ("nleqq;", "\u{2266}\u{0338}"),
    ("gE;", "\u{2267}"),
    ("geqq;", "\u{2267}"),
    ("GreaterFullEqual;", "\u{2267}"),
    ("ngE;", "\u{2267}\u{0338}"),
    ("ngeqq;", "\u{2267}\u{0338}"),
    ("NotGreaterFullEqual;", "\u{2267}\u{0338}"),
    ("lnE;", "\u{2268}"),
    ("lneqq;", "\u{2268}"),
    ("lvertneqq;", "\u{2268}\u{FE00}"),
    ("lvnE;", "\u{2268}\u{FE00}"),
    ("gnE;", "\u{2269}"),
    ("gneqq;", "\u{2269}"),
    ("gvertneqq;", "\u{2269}\u{FE00}"),
    ("gvnE;", "\u{2269}\u{FE00}"),
    ("ll;", "\u{226A}"),
    ("Lt;", "\u{226A}"),
    ("NestedLessLess;", "\u{226A}"),
    ("nLtv;", "\u{226A}\u{0338}"),
    ("NotLessLess;", "\u{226A}\u{0338}"),
    ("nLt;", "\u{226A}\u{20D2}"),
    ("gg;", "\u{226B}"),
    ("Gt;", "\u{226B}"),
    ("NestedGreaterGreater;", "\u{226B}"),
    ("nGtv;", "\u{226B}\u{0338}"),
    ("NotGreaterGreater;", "\u{226B}\u{0338}"),
    ("nGt;", "\u{226B}\u{20D2}"),
    ("between;", "\u{226C}"),
    ("twixt;", "\u{226C}"),
    ("NotCupCap;", "\u{226D}"),
    ("nless;", "\u{226E}"),
    ("nlt;", "\u{226E}"),
    ("NotLess;", "\u{226E}"),
    ("ngt;", "\u{226F}"),
    ("ngtr;", "\u{226F}"),
    ("NotGreater;", "\u{226F}"),
    ("nle;", "\u{2270}"),
    ("nleq;", "\u{2270}"),
    ("NotLessEqual;", "\u{2270}"),
    ("nge;", "\u{2271}"),
    ("ngeq;", "\u{2271}"),
    ("NotGreaterEqual;", "\u{2271}"),
    ("lesssim;", "\u{2272}"),
    ("LessTilde;", "\u{2272}"),
    ("lsim;", "\u{2272}"),
    ("GreaterTilde;", "\u{2273}"),
    ("gsim;", "\u{2273}"),
    ("gtrsim;", "\u{2273}"),
    ("nlsim;", "\u{2274}"),
    ("NotLessTilde;", "\u{2274}"),
    ("ngsim;", "\u{2275}"),
    ("NotGreaterTilde;", "\u{2275}"),
    ("LessGreater;", "\u{2276}"),
    ("lessgtr;", "\u{2276}"),
    ("lg;", "\u{2276}"),
    ("gl;", "\u{2277}"),
    ("GreaterLess;", "\u{2277}"),
    ("gtrless;", "\u{2277}"),
    ("NotLessGreater;", "\u{2278}"),
    ("ntlg;", "\u{2278}"),
    ("NotGreaterLess;", "\u{2279}"),
    ("ntgl;", "\u{2279}"),
    ("pr;", "\u{227A}"),
    ("prec;", "\u{227A}"),
    ("Precedes;", "\u{227A}"),
    ("sc;", "\u{227B}"),
    ("succ;", "\u{227B}"),
    ("Succeeds;", "\u{227B}"),
    ("prcue;", "\u{227C}"),
    ("preccurlyeq;", "\u{227C}"),
    ("PrecedesSlantEqual;", "\u{227C}"),
    ("sccue;", "\u{227D}"),
    ("succcurlyeq;", "\u{227D}"),
    ("SucceedsSlantEqual;", "\u{227D}"),
    ("PrecedesTilde;", "\u{227E}"),
    ("precsim;", "\u{227E}"),
    ("prsim;", "\u{227E}"),
    ("scsim;", "\u{227F}"),
    ("SucceedsTilde;", "\u{227F}"),
    ("succsim;", "\u{227F}"),
    ("NotSucceedsTilde;", "\u{227F}\u{0338}"),
    ("NotPrecedes;", "\u{2280}"),
    ("npr;", "\u{2280}"),
    ("nprec;", "\u{2280}"),
    ("NotSucceeds;", "\u{2281}"),
    ("nsc;", "\u{2281}"),
    ("nsucc;", "\u{2281}"),
    ("subset;", "\u{2282}"),
    ("NotSubset;", "\u{2282}\u{20D2}"),
    ("nsubset;", "\u{2282}\u{20D2}"),
    ("vnsub;", "\u{2282}\u{20D2}"),
    ("Superset;", "\u{2283}"),
    ("supset;", "\u{2283}"),
    ("NotSuperset;", "\u{2283}\u{20D2}"),
    ("nsupset;", "\u{2283}\u{20D2}"),
    ("vnsup;", "\u{2283}\u{20D2}"),
    ("nsup;", "\u{2285}"),
    ("subseteq;", "\u{2286}"),
    ("SubsetEqual;", "\u{2286}"),
    ("SupersetEqual;", "\u{2287}"),
    ("supseteq;", "\u{2287}"),
    ("NotSubsetEqual;", "\u{2288}"),
    ("nsube;", "\u{2288}"),
    ("nsubseteq;", "\u{2288}"),
    ("NotSupersetEqual;", "\u{2289}"),
    ("nsupe;", "\u{2289}"),
    ("nsupseteq;", "\u{2289}"),
    ("subne;", "\u{228A}"),
    ("subsetneq;", "\u{228A}"),
    ("varsubsetneq;", "\u{228A}\u{FE00}"),
    ("vsubne;", "\u{228A}\u{FE00}"),
    ("supne;", "\u{228B}"),
    ("supsetneq;", "\u{228B}"),
    ("varsupsetneq;", "\u{228B}\u{FE00}"),
    ("vsupne;", "\u{228B}\u{FE00}"),
    ("cupdot;", "\u{228D}"),
    ("UnionPlus;", "\u{228E}"),
    ("uplus;", "\u{228E}"),
    ("sqsub;", "\u{228F}"),
    ("sqsubset;", "\u{228F}"),
    ("SquareSubset;", "\u{228F}"),
    ("NotSquareSubset;", "\u{228F}\u{0338}"),
    ("sqsup;", "\u{2290}"),
    ("sqsupset;", "\u{2290}"),
    ("SquareSuperset;", "\u{2290}"),
    ("NotSquareSuperset;", "\u{2290}\u{0338}"),
    ("sqsube;", "\u{2291}"),
    ("sqsubseteq;", "\u{2291}"),
    ("SquareSubsetEqual;", "\u{2291}"),
    ("sqsupe;", "\u{2292}"),
    ("sqsupseteq;", "\u{2292}"),
    ("SquareSupersetEqual;", "\u{2292}"),
    ("sqcap;", "\u{2293}"),
    ("SquareIntersection;", "\u{2293}"),
    ("sqcaps;", "\u{2293}\u{FE00}"),
    ("sqcup;", "\u{2294}"),
    ("SquareUnion;", "\u{2294}"),
    ("sqcups;", "\u{2294}\u{FE00}"),
    ("CirclePlus;", "\u{2295}"),
    ("CircleMinus;", "\u{2296}"),
    ("ominus;", "\u{2296}"),
    ("CircleTimes;", "\u{2297}"),
    ("osol;", "\u{2298}"),
    ("CircleDot;", "\u{2299}"),
    ("odot;", "\u{2299}"),
    ("circledcirc;", "\u{229A}"),
    ("ocir;", "\u{229A}"),
    ("circledast;", "\u{229B}"),
    ("oast;", "\u{229B}"),
    ("circleddash;", "\u{229D}"),
    ("odash;", "\u{229D}"),
    ("boxplus;", "\u{229E}"),
    ("plusb;", "\u{229E}"),
    ("boxminus;", "\u{229F}"),
    ("minusb;", "\u{229F}"),
    ("boxtimes;", "\u{22A0}"),
    ("timesb;", "\u{22A0}"),
    ("dotsquare;", "\u{22A1}"),
    ("sdotb;", "\u{22A1}"),
    ("RightTee;", "\u{22A2}"),
    ("vdash;", "\u{22A2}"),
    ("dashv;", "\u{22A3}"),
    ("LeftTee;", "\u{22A3}"),
    ("DownTee;", "\u{22A4}"),
    ("top;", "\u{22A4}"),
    ("bot;", "\u{22A5}"),
    ("bottom;", "\u{22A5}"),
    ("UpTee;", "\u{22A5}"),
    ("models;", "\u{22A7}"),
    ("DoubleRightTee;", "\u{22A8}"),
    ("vDash;", "\u{22A8}"),
    ("Vdash;", "\u{22A9}"),
    ("Vvdash;", "\u{22AA}"),
    ("VDash;", "\u{22AB}"),
    ("nvdash;", "\u{22AC}"),
    ("nvDash;", "\u{22AD}"),
    ("nVdash;", "\u{22AE}"),
    ("nVDash;", "\u{22AF}"),
    ("prurel;", "\u{22B0}"),
    ("LeftTriangle;", "\u{22B2}"),
    ("vartriangleleft;", "\u{22B2}"),
    ("vltri;", "\u{22B2}"),
    ("RightTriangle;", "\u{22B3}"),
    ("vartriangleright;", "\u{22B3}"),
    ("vrtri;", "\u{22B3}"),
    ("LeftTriangleEqual;", "\u{22B4}"),
    ("ltrie;", "\u{22B4}"),
    ("trianglelefteq;", "\u{22B4}"),
    ("nvltrie;", "\u{22B4}\u{20D2}"),
    ("RightTriangleEqual;", "\u{22B5}"),
    ("rtrie;", "\u{22B5}"),
    ("trianglerighteq;", "\u{22B5}"),
    ("nvrtrie;", "\u{22B5}\u{20D2}"),
    ("origof;", "\u{22B6}"),
    ("imof;", "\u{22B7}"),
    ("multimap;", "\u{22B8}"),
    ("mumap;", "\u{22B8}"),
    ("hercon;", "\u{22B9}"),
    ("intcal;", "\u{22BA}"),
    ("intercal;", "\u{22BA}"),
    ("veebar;", "\u{22BB}"),
    ("barvee;", "\u{22BD}"),
    ("angrtvb;", "\u{22BE}"),
    ("lrtri;", "\u{22BF}"),
    ("bigwedge;", "\u{22C0}"),
    ("Wedge;", "\u{22C0}"),
    ("xwedge;", "\u{22C0}"),
    ("bigvee;", "\u{22C1}"),
    ("Vee;", "\u{22C1}"),
    ("xvee;", "\u{22C1}"),
    ("bigcap;", "\u{22C2}"),
    ("Intersection;", "\u{22C2}"),
    ("xcap;", "\u{22C2}"),
    ("bigcup;", "\u{22C3}"),
    ("Union;", "\u{22C3}"),
    ("xcup;", "\u{22C3}"),
    ("diam;", "\u{22C4}"),
    ("Diamond;", "\u{22C4}"),
    ("diamond;", "\u{22C4}"),
    ("sstarf;", "\u{22C6}"),
    ("Star;", "\u{22C6}"),
    ("divideontimes;", "\u{22C7}"),
    ("divonx;", "\u{22C7}"),
    ("bowtie;", "\u{22C8}"),
    ("ltimes;", "\u{22C9}"),
    ("rtimes;", "\u{22CA}"),
    ("leftthreetimes;", "\u{22CB}"),
    ("lthree;", "\u{22CB}"),
    ("rightthreetimes;", "\u{22CC}"),
    ("rthree;", "\u{22CC}"),
    ("backsimeq;", "\u{22CD}"),
    ("bsime;", "\u{22CD}"),
    ("curlyvee;", "\u{22CE}"),
    ("cuvee;", "\u{22CE}"),
    ("curlywedge;", "\u{22CF}"),
    ("cuwed;", "\u{22CF}"),
    ("Sub;", "\u{22D0}"),
    ("Subset;", "\u{22D0}"),
    ("Sup;", "\u{22D1}"),
    ("Supset;", "\u{22D1}"),
    ("Cap;", "\u{22D2}"),
    ("Cup;", "\u{22D3}"),
    ("fork;", "\u{22D4}"),
    ("pitchfork;", "\u{22D4}"),
    ("epar;", "\u{22D5}"),
    ("lessdot;", "\u{22D6}"),
    ("ltdot;", "\u{22D6}"),
    ("gtdot;", "\u{22D7}"),
    ("gtrdot;", "\u{22D7}"),
    ("Ll;", "\u{22D8}"),
    ("nLl;", "\u{22D8}\u{0338}"),
    ("Gg;", "\u{22D9}"),
    ("ggg;", "\u{22D9}"),
    ("nGg;", "\u{22D9}\u{0338}"),
    ("leg;", "\u{22DA}"),
    ("lesseqgtr;", "\u{22DA}"),
    ("LessEqualGreater;", "\u{22DA}"),
    ("lesg;", "\u{22DA}\u{FE00}"),
    ("gel;", "\u{22DB}"),
    ("GreaterEqualLess;", "\u{22DB}"),
    ("gtreqless;", "\u{22DB}"),
    ("gesl;", "\u{22DB}\u{FE00}"),
    ("cuepr;", "\u{22DE}"),
    ("curlyeqprec;", "\u{22DE}"),
    ("cuesc;", "\u{22DF}"),
    ("curlyeqsucc;", "\u{22DF}"),
    ("NotPrecedesSlantEqual;", "\u{22E0}"),
    ("nprcue;", "\u{22E0}"),
    ("NotSucceedsSlantEqual;", "\u{22E1}"),
    ("nsccue;", "\u{22E1}"),
    ("NotSquareSubsetEqual;", "\u{22E2}"),
    ("nsqsube;", "\u{22E2}"),
    ("NotSquareSupersetEqual;", "\u{22E3}"),
    ("nsqsupe;", "\u{22E3}"),
    ("lnsim;", "\u{22E6}"),
    ("gnsim;", "\u{22E7}"),
    ("precnsim;", "\u{22E8}"),
    ("prnsim;", "\u{22E8}"),
    ("scnsim;", "\u{22E9}"),
    ("succnsim;", "\u{22E9}"),
    ("nltri;", "\u{22EA}"),
    ("NotLeftTriangle;", "\u{22EA}"),
    ("ntriangleleft;", "\u{22EA}"),
    ("NotRightTriangle;", "\u{22EB}"),
    ("nrtri;", "\u{22EB}"),
    ("ntriangleright;", "\u{22EB}"),
    ("nltrie;", "\u{22EC}"),
    ("NotLeftTriangleEqual;", "\u{22EC}"),
    ("ntrianglelefteq;", "\u{22EC}"),
    ("NotRightTriangleEqual;", "\u{22ED}"),
    ("nrtrie;", "\u{22ED}"),
    ("ntrianglerighteq;", "\u{22ED}"),
    ("vellip;", "\u{22EE}"),
    ("ctdot;", "\u{22EF}"),
    ("utdot;", "\u{22F0}"),
    ("dtdot;", "\u{22F1}"),
    ("disin;", "\u{22F2}"),
    ("isinsv;", "\u{22F3}"),
    ("isins;", "\u{22F4}"),
    ("isindot;", "\u{22F5}"),
    ("notindot;", "\u{22F5}\u{0338}"),
    ("notinvc;", "\u{22F6}"),
    ("notinvb;", "\u{22F7}"),
    ("isinE;", "\u{22F9}"),
    ("notinE;", "\u{22F9}\u{0338}"),
    ("nisd;", "\u{22FA}"),
    ("xnis;", "\u{22FB}"),
    ("nis;", "\u{22FC}"),
    ("notnivc;", "\u{22FD}"),
    ("notnivb;", "\u{22FE}"),
    ("barwed;", "\u{2305}"),
    ("barwedge;", "\u{2305}"),
    ("Barwed;", "\u{2306}"),
    ("doublebarwedge;", "\u{2306}"),
    ("LeftCeiling;", "\u{2308}"),
    ("RightCeiling;", "\u{2309}"),
    ("LeftFloor;", "\u{230A}"),
    ("RightFloor;", "\u{230B}"),
    ("drcrop;", "\u{230C}"),
    ("dlcrop;", "\u{230D}"),
    ("urcrop;", "\u{230E}"),
    ("ulcrop;", "\u{230F}"),
    ("bnot;", "\u{2310}"),
    ("profline;", "\u{2312}"),
    ("profsurf;", "\u{2313}"),
    ("telrec;", "\u{2315}"),
    ("target;", "\u{2316}"),
    ("ulcorn;", "\u{231C}"),
    ("ulcorner;", "\u{231C}"),
    ("urcorn;", "\u{231D}"),
    ("urcorner;", "\u{231D}"),
    ("dlcorn;", "\u{231E}"),
    ("llcorner;", "\u{231E}"),
    ("drcorn;", "\u{231F}"),
    ("lrcorner;", "\u{231F}"),
    ("frown;", "\u{2322}"),
    ("sfrown;", "\u{2322}"),
    ("smile;", "\u{2323}"),
    ("ssmile;", "\u{2323}"),
    ("cylcty;", "\u{232D}"),
    ("profalar;", "\u{232E}"),
    ("topbot;", "\u{2336}"),
    ("ovbar;", "\u{233D}"),
    ("solbar;", "\u{233F}"),
    ("angzarr;", "\u{237C}"),
    ("lmoust;", "\u{23B0}"),
    ("lmoustache;", "\u{23B0}"),
    ("rmoust;", "\u{23B1}"),
    ("rmoustache;", "\u{23B1}"),
    ("OverBracket;", "\u{23B4}"),
    ("tbrk;", "\u{23B4}"),
    ("bbrk;", "\u{23B5}"),
    ("UnderBracket;", "\u{23B5}"),
    ("bbrktbrk;", "\u{23B6}"),
    ("OverParenthesis;", "\u{23DC}"),
    ("UnderParenthesis;", "\u{23DD}"),
    ("OverBrace;", "\u{23DE}"),
    ("UnderBrace;", "\u{23DF}"),
    ("trpezium;", "\u{23E2}"),
    ("elinters;", "\u{23E7}"),
    ("blank;", "\u{2423}"),
    ("circledS;", "\u{24C8}"),
    ("oS;", "\u{24C8}"),
    ("boxh;", "\u{2500}"),
    ("HorizontalLine;", "\u{2500}"),
    ("boxv;", "\u{2502}"),
    ("boxdr;", "\u{250C}"),
    ("boxdl;", "\u{2510}"),
    ("boxur;", "\u{2514}"),
    ("boxul;", "\u{2518}"),
    ("boxvr;", "\u{251C}"),
    ("boxvl;", "\u{2524}"),
    ("boxhd;", "\u{252C}"),
    ("boxhu;", "\u{2534}"),
    ("boxvh;", "\u{253C}"),
    ("boxH;", "\u{2550}"),
    ("boxV;", "\u{2551}"),
    ("boxdR;", "\u{2552}"),
    ("boxDr;", "\u{2553}"),
    ("boxDR;", "\u{2554}"),
    ("boxdL;", "\u{2555}"),
    ("boxDl;", "\u{2556}"),
    ("boxDL;", "\u{2557}"),
    ("boxuR;", "\u{2558}"),
    ("boxUr;", "\u{2559}"),
    ("boxUR;", "\u{255A}"),
    ("boxuL;", "\u{255B}"),
    ("boxUl;", "\u{255C}"),
    ("boxUL;", "\u{255D}"),
    ("boxvR;", "\u{255E}"),
    ("boxVr;", "\u{255F}"),
    ("boxVR;", "\u{2560}"),
    ("boxvL;", "\u{2561}"),
    ("boxVl;", "\u{2562}"),
    ("boxVL;", "\u{2563}"),
    ("boxHd;", "\u{2564}"),
    ("boxhD;", "\u{2565}"),
    ("boxHD;", "\u{2566}"),
    ("boxHu;", "\u{2567}"),
    ("boxhU;", "\u{2568}"),
    ("boxHU;", "\u{2569}"),
    ("boxvH;", "\u{256A}"),
    ("boxVh;", "\u{256B}"),
    ("boxVH;", "\u{256C}"),
    ("uhblk;", "\u{2580}"),
    ("lhblk;", "\u{2584}"),
    ("block;", "\u{2588}"),
    ("blk14;", "\u{2591}"),
    ("blk12;", "\u{2592}"),
    ("blk34;", "\u{2593}"),
    ("squ;", "\u{25A1}"),
    ("Square;", "\u{25A1}"),
    ("square;", "\u{25A1}"),
    ("blacksquare;", "\u{25AA}"),
    ("FilledVerySmallSquare;", "\u{25AA}"),
    ("squarf;", "\u{25AA}"),
    ("squf;", "\u{25AA}"),
    ("EmptyVerySmallSquare;", "\u{25AB}"),
    ("rect;", "\u{25AD}"),
    ("marker;", "\u{25AE}"),
    ("fltns;", "\u{25B1}"),
    ("bigtriangleup;", "\u{25B3}"),
    ("xutri;", "\u{25B3}"),
    ("blacktriangle;", "\u{25B4}"),
    ("utrif;", "\u{25B4}"),
    ("triangle;", "\u{25B5}"),
    ("utri;", "\u{25B5}"),
    ("blacktriangleright;", "\u{25B8}"),
    ("rtrif;", "\u{25B8}"),
    ("rtri;", "\u{25B9}"),
    ("triangleright;", "\u{25B9}"),
    ("bigtriangledown;", "\u{25BD}"),
    ("xdtri;", "\u{25BD}"),
    ("blacktriangledown;", "\u{25BE}"),
    ("dtrif;", "\u{25BE}"),
    ("dtri;", "\u{25BF}"),
    ("triangledown;", "\u{25BF}"),
    ("blacktriangleleft;", "\u{25C2}"),
    ("ltrif;", "\u{25C2}"),
    ("ltri;", "\u{25C3}"),
    ("triangleleft;", "\u{25C3}"),
    ("lozenge;", "\u{25CA}"),
    ("cir;", "\u{25CB}"),
    ("tridot;", "\u{25EC}"),
    ("bigcirc;", "\u{25EF}"),
    ("xcirc;", "\u{25EF}"),
    ("ultri;", "\u{25F8}"),
    ("urtri;", "\u{25F9}"),
    ("lltri;", "\u{25FA}"),
    ("EmptySmallSquare;", "\u{25FB}"),
    ("FilledSmallSquare;", "\u{25FC}"),
    ("bigstar;", "\u{2605}"),
    ("starf;", "\u{2605}"),
    ("star;", "\u{2606}"),
    ("phone;", "\u{260E}"),
    ("female;", "\u{2640}"),
    ("male;", "\u{2642}"),
    ("spadesuit;", "\u{2660}"),
    ("clubsuit;", "\u{2663}"),
    ("heartsuit;", "\u{2665}"),
    ("diamondsuit;", "\u{2666}"),
    ("sung;", "\u{266A}"),
    ("flat;", "\u{266D}"),
    ("natur;", "\u{266E}"),
    ("natural;", "\u{266E}"),
    ("sharp;", "\u{266F}"),
    ("check;", "\u{2713}"),
    ("checkmark;", "\u{2713}"),
    ("cross;", "\u{2717}"),
    ("malt;", "\u{2720}"),
    ("maltese;", "\u{2720}"),
    ("sext;", "\u{2736}"),
    ("VerticalSeparator;", "\u{2758}"),
    ("lbbrk;", "\u{2772}"),
    ("rbbrk;", "\u{2773}"),
    ("bsolhsub;", "\u{27C8}"),
    ("suphsol;", "\u{27C9}"),
    ("LeftDoubleBracket;", "\u{27E6}"),
    ("lobrk;", "\u{27E6}"),
    ("RightDoubleBracket;", "\u{27E7}"),
    ("robrk;", "\u{27E7}"),
    ("lang;", "\u{27E8}"),
    ("langle;", "\u{27E8}"),
    ("LeftAngleBracket;", "\u{27E8}"),
    ("rang;", "\u{27E9}"),
    ("rangle;", "\u{27E9}"),
    ("RightAngleBracket;", "\u{27E9}"),
    ("Lang;", "\u{27EA}"),
    ("Rang;", "\u{27EB}"),
    ("loang;", "\u{27EC}"),
    ("roang;", "\u{27ED}"),
    ("LongLeftArrow;", "\u{27F5}"),
    ("longleftarrow;", "\u{27F5}"),
    ("xlarr;", "\u{27F5}"),
    ("LongRightArrow;", "\u{27F6}"),
    ("longrightarrow;", "\u{27F6}"),
    ("xrarr;", "\u{27F6}"),
    ("LongLeftRightArrow;", "\u{27F7}"),
    ("longleftrightarrow;", "\u{27F7}"),
    ("xharr;", "\u{27F7}"),
    ("DoubleLongLeftArrow;", "\u{27F8}"),
    ("Longleftarrow;", "\u{27F8}"),
    ("xlArr;", "\u{27F8}"),
    ("DoubleLongRightArrow;", "\u{27F9}"),
    ("Longrightarrow;", "\u{27F9}"),
    ("xrArr;", "\u{27F9}"),
    ("DoubleLongLeftRightArrow;", "\u{27FA}"),
    ("Longleftrightarrow;", "\u{27FA}"),
    ("xhArr;", "\u{27FA}"),
    ("longmapsto;", "\u{27FC}"),
    ("xmap;", "\u{27FC}"),
    ("dzigrarr;", "\u{27FF}"),
    ("nvlArr;", "\u{2902}"),
    ("nvrArr;", "\u{2903}"),
    ("nvHarr;", "\u{2904}"),
    ("Map;", "\u{2905}"),
    ("lbarr;", "\u{290C}"),
    ("bkarow;", "\u{290D}"),
    ("rbarr;", "\u{290D}"),
    ("lBarr;", "\u{290E}"),
    ("dbkarow;", "\u{290F}"),
    ("rBarr;", "\u{290F}"),
    ("drbkarow;", "\u{2910}"),
    ("RBarr;", "\u{2910}"),
    ("DDotrahd;", "\u{2911}"),
    ("UpArrowBar;", "\u{2912}"),
    ("DownArrowBar;", "\u{2913}"),
    ("Rarrtl;", "\u{2916}"),
    ("latail;", "\u{2919}"),
    ("ratail;", "\u{291A}"),
    ("lAtail;", "\u{291B}"),
    ("rAtail;", "\u{291C}"),
    ("larrfs;", "\u{291D}"),
    ("rarrfs;", "\u{291E}"),
    ("larrbfs;", "\u{291F}"),
    ("rarrbfs;", "\u{2920}"),
    ("nwarhk;", "\u{2923}"),
    ("nearhk;", "\u{2924}"),
    ("hksearow;", "\u{2925}"),
    ("searhk;", "\u{2925}"),
    ("hkswarow;", "\u{2926}"),
    ("swarhk;", "\u{2926}"),
    ("nwnear;", "\u{2927}"),
    ("nesear;", "\u{2928}"),
    ("toea;", "\u{2928}"),
    ("seswar;", "\u{2929}"),
    ("tosa;", "\u{2929}"),
    ("swnwar;", "\u{292A}"),
    ("rarrc;", "\u{2933}"),
    ("nrarrc;", "\u{2933}\u{0338}"),
    ("cudarrr;", "\u{2935}"),
    ("ldca;", "\u{2936}"),
    ("rdca;", "\u{2937}"),
    ("cudarrl;", "\u{2938}"),
    ("larrpl;", "\u{2939}"),
    ("curarrm;", "\u{293C}"),
    ("cularrp;", "\u{293D}"),
    ("rarrpl;", "\u{2945}"),
    ("harrcir;", "\u{2948}"),
    ("Uarrocir;", "\u{2949}"),
    ("lurdshar;", "\u{294A}"),
    ("ldrushar;", "\u{294B}"),
    ("LeftRightVector;", "\u{294E}"),
    ("RightUpDownVector;", "\u{294F}"),
    ("DownLeftRightVector;", "\u{2950}"),
    ("LeftUpDownVector;", "\u{2951}"),
    ("LeftVectorBar;", "\u{2952}"),
    ("RightVectorBar;", "\u{2953}"),
    ("RightUpVectorBar;", "\u{2954}"),
    ("RightDownVectorBar;", "\u{2955}"),
    ("DownLeftVectorBar;", "\u{2956}"),
    ("DownRightVectorBar;", "\u{2957}"),
    ("LeftUpVectorBar;", "\u{2958}"),
    ("LeftDownVectorBar;", "\u{2959}"),
    ("LeftTeeVector;", "\u{295A}"),
    ("RightTeeVector;", "\u{295B}"),
    ("RightUpTeeVector;", "\u{295C}"),
    ("RightDownTeeVector;", "\u{295D}"),
    ("DownLeftTeeVector;", "\u{295E}"),
    ("DownRightTeeVector;", "\u{295F}"),
    ("LeftUpTeeVector;", "\u{2960}"),
    ("LeftDownTeeVector;", "\u{2961}"),
    ("lHar;", "\u{2962}"),
    ("uHar;", "\u{2963}"),
    ("rHar;", "\u{2964}"),
    ("dHar;", "\u{2965}"),
    ("luruhar;", "\u{2966}"),
    ("ldrdhar;", "\u{2967}"),
    ("ruluhar;", "\u{2968}"),
    ("rdldhar;", "\u{2969}"),
    ("lharul;", "\u{296A}"),
    ("llhard;", "\u{296B}"),
    ("rharul;", "\u{296C}"),
    ("lrhard;", "\u{296D}"),
    ("udhar;", "\u{296E}"),
    ("UpEquilibrium;", "\u{296E}"),
    ("duhar;", "\u{296F}"),
    ("ReverseUpEquilibrium;", "\u{296F}"),
    ("RoundImplies;", "\u{2970}"),
    ("erarr;", "\u{2971}"),
    ("simrarr;", "\u{2972}"),
    ("larrsim;", "\u{2973}"),
    ("rarrsim;", "\u{2974}"),
    ("rarrap;", "\u{2975}"),
    ("ltlarr;", "\u{2976}"),
    ("gtrarr;", "\u{2978}"),
    ("subrarr;", "\u{2979}"),
    ("suplarr;", "\u{297B}"),
    ("lfisht;", "\u{297C}"),
    ("rfisht;", "\u{297D}"),
    ("ufisht;", "\u{297E}"),
    ("dfisht;", "\u{297F}"),
    ("lopar;", "\u{2985}"),
    ("ropar;", "\u{2986}"),
    ("lbrke;", "\u{298B}"),
    ("rbrke;", "\u{298C}"),
    ("lbrkslu;", "\u{298D}"),
    ("rbrksld;", "\u{298E}"),
    ("lbrksld;", "\u{298F}"),
    ("rbrkslu;", "\u{2990}"),
    ("langd;", "\u{2991}"),
    ("rangd;", "\u{2992}"),
    ("lparlt;", "\u{2993}"),
    ("rpargt;", "\u{2994}"),
    ("gtlPar;", "\u{2995}"),
    ("ltrPar;", "\u{2996}"),
    ("vzigzag;", "\u{299A}"),
    ("vangrt;", "\u{299C}"),
    ("angrtvbd;", "\u{299D}"),
    ("ange;", "\u{29A4}"),
    ("range;", "\u{29A5}"),
    ("dwangle;", "\u{29A6}"),
    ("uwangle;", "\u{29A7}"),
    ("angmsdaa;", "\u{29A8}"),
    ("angmsdab;", "\u{29A9}"),
    ("angmsdac;", "\u{29AA}"),
    ("angmsdad;", "\u{29AB}"),
    ("angmsdae;", "\u{29AC}"),
    ("angmsdaf;", "\u{29AD}"),
    ("angmsdag;", "\u{29AE}"),
    ("angmsdah;", "\u{29AF}"),
    ("bemptyv;", "\u{29B0}"),
    ("demptyv;", "\u{29B1}"),
    ("cemptyv;", "\u{29B2}"),
    ("raemptyv;", "\u{29B3}"),
    ("laemptyv;", "\u{29B4}"),
    ("ohbar;", "\u{29B5}"),
    ("omid;", "\u{29B6}"),
    ("opar;", "\u{29B7}"),
    ("operp;", "\u{29B9}"),
    ("olcross;", "\u{29BB}"),
    ("odsold;", "\u{29BC}"),
    ("olcir;", "\u{29BE}"),
    ("ofcir;", "\u{29BF}"),
    ("olt;", "\u{29C0}"),
    ("ogt;", "\u{29C1}"),
    ("cirscir;", "\u{29C2}"),
    ("cirE;", "\u{29C3}"),
    ("solb;", "\u{29C4}"),
    ("bsolb;", "\u{29C5}"),
    ("boxbox;", "\u{29C9}"),
    ("trisb;", "\u{29CD}"),
    ("rtriltri;", "\u{29CE}"),
    ("LeftTriangleBar;", "\u{29CF}"),
    ("NotLeftTriangleBar;", "\u{29CF}\u{0338}"),
    ("RightTriangleBar;", "\u{29D0}"),
    ("NotRightTriangleBar;", "\u{29D0}\u{0338}"),
    ("iinfin;", "\u{29DC}"),
    ("infintie;", "\u{29DD}"),
    ("nvinfin;", "\u{29DE}"),
    ("eparsl;", "\u{29E3}"),
    ("smeparsl;", "\u{29E4}"),
    ("eqvparsl;", "\u{29E5}"),
    ("blacklozenge;", "\u{29EB}"),
    ("lozf;", "\u{29EB}"),
    ("RuleDelayed;", "\u{29F4}"),
    ("dsol;", "\u{29F6}"),
    ("bigodot;", "\u{2A00}"),
    ("xodot;", "\u{2A00}"),
    ("bigoplus;", "\u{2A01}"),
    ("xoplus;", "\u{2A01}"),
    ("bigotimes;", "\u{2A02}"),
    ("xotime;", "\u{2A02}"),
    ("biguplus;", "\u{2A04}"),
    ("xuplus;", "\u{2A04}"),
    ("bigsqcup;", "\u{2A06}"),
    ("xsqcup;", "\u{2A06}"),
    ("iiiint;", "\u{2A0C}"),
    ("qint;", "\u{2A0C}"),
    ("fpartint;", "\u{2A0D}"),
    ("cirfnint;", "\u{2A10}"),
    ("awint;", "\u{2A11}"),
    ("rppolint;", "\u{2A12}"),
    ("scpolint;", "\u{2A13}"),
    ("npolint;", "\u{2A14}"),
    ("pointint;", "\u{2A15}"),
    ("quatint;", "\u{2A16}"),
    ("intlarhk;", "\u{2A17}"),
    ("pluscir;", "\u{2A22}"),
    ("plusacir;", "\u{2A23}"),
    ("simplus;", "\u{2A24}"),
    ("plusdu;", "\u{2A25}"),
    ("plussim;", "\u{2A26}"),
    ("plustwo;", "\u{2A27}"),
    ("mcomma;", "\u{2A29}"),
    ("minusdu;", "\u{2A2A}"),
    ("loplus;", "\u{2A2D}"),
    ("roplus;", "\u{2A2E}"),
    ("Cross;", "\u{2A2F}"),
    ("timesd;", "\u{2A30}"),
    ("timesbar;", "\u{2A31}"),
    ("smashp;", "\u{2A33}"),
    ("lotimes;", "\u{2A34}"),
    ("rotimes;", "\u{2A35}"),
    ("otimesas;", "\u{2A36}"),
    ("Otimes;", "\u{2A37}"),
    ("odiv;", "\u{2A38}"),
    ("triplus;", "\u{2A39}"),
    ("triminus;", "\u{2A3A}"),
    ("tritime;", "\u{2A3B}"),
    ("intprod;", "\u{2A3C}"),
    ("iprod;", "\u{2A3C}"),
    ("amalg;", "\u{2A3F}"),
    ("capdot;", "\u{2A40}"),
    ("ncup;", "\u{2A42}"),
    ("ncap;", "\u{2A43}"),
    ("capand;", "\u{2A44}"),
    ("cupor;", "\u{2A45}"),
    ("cupcap;", "\u{2A46}"),
    ("capcup;", "\u{2A47}"),
    ("cupbrcap;", "\u{2A48}"),
    ("capbrcup;", "\u{2A49}"),
    ("cupcup;", "\u{2A4A}"),
    ("capcap;", "\u{2A4B}"),
    ("ccups;", "\u{2A4C}"),
    ("ccaps;", "\u{2A4D}"),
    ("ccupssm;", "\u{2A50}"),
    ("And;", "\u{2A53}"),
    ("Or;", "\u{2A54}"),
    ("andand;", "\u{2A55}"),
    ("oror;", "\u{2A56}"),
    ("orslope;", "\u{2A57}"),
    ("andslope;", "\u{2A58}"),
    ("andv;", "\u{2A5A}"),
    ("orv;", "\u{2A5B}"),
    ("andd;", "\u{2A5C}"),
    ("ord;", "\u{2A5D}"),
    ("wedbar;", "\u{2A5F}"),
    ("sdote;", "\u{2A66}"),
    ("simdot;", "\u{2A6A}"),
    ("congdot;", "\u{2A6D}"),
    ("ncongdot;", "\u{2A6D}\u{0338}"),
    ("easter;", "\u{2A6E}"),
    ("apacir;", "\u{2A6F}"),
    ("apE;", "\u{2A70}"),
    ("napE;", "\u{2A70}\u{0338}"),
    ("eplus;", "\u{2A71}"),
    ("pluse;", "\u{2A72}"),
    ("Esim;", "\u{2A73}"),
    ("Colone;", "\u{2A74}"),
    ("Equal;", "\u{2A75}"),
    ("ddotseq;", "\u{2A77}"),
    ("eDDot;", "\u{2A77}"),
    ("equivDD;", "\u{2A78}"),
    ("ltcir;", "\u{2A79}"),
    ("gtcir;", "\u{2A7A}"),
    ("ltquest;", "\u{2A7B}"),
    ("gtquest;", "\u{2A7C}"),
    ("leqslant;", "\u{2A7D}"),
    ("les;", "\u{2A7D}"),
    ("LessSlantEqual;", "\u{2A7D}"),
    ("nleqslant;", "\u{2A7D}\u{0338}"),
    ("nles;", "\u{2A7D}\u{0338}"),
    ("NotLessSlantEqual;", "\u{2A7D}\u{0338}"),
    ("geqslant;", "\u{2A7E}"),
    ("ges;", "\u{2A7E}"),
    ("GreaterSlantEqual;", "\u{2A7E}"),
    ("ngeqslant;", "\u{2A7E}\u{0338}"),
    ("nges;", "\u{2A7E}\u{0338}"),
    ("NotGreaterSlantEqual;", "\u{2A7E}\u{0338}"),
    ("lesdot;", "\u{2A7F}"),
    ("gesdot;", "\u{2A80}"),
    ("lesdoto;", "\u{2A81}"),
    ("gesdoto;", "\u{2A82}"),
    ("lesdotor;", "\u{2A83}"),
    ("gesdotol;", "\u{2A84}"),
    ("lap;", "\u{2A85}"),
    ("lessapprox;", "\u{2A85}"),
    ("gap;", "\u{2A86}"),
    ("gtrapprox;", "\u{2A86}"),
    ("lne;", "\u{2A87}"),
    ("lneq;", "\u{2A87}"),
    ("gne;", "\u{2A88}"),
    ("gneq;", "\u{2A88}"),
    ("lnap;", "\u{2A89}"),
    ("lnapprox;", "\u{2A89}"),
    ("gnap;", "\u{2A8A}"),
    ("gnapprox;", "\u{2A8A}"),
    ("lEg;", "\u{2A8B}"),
    ("lesseqqgtr;", "\u{2A8B}"),
    ("gEl;", "\u{2A8C}"),
    ("gtreqqless;", "\u{2A8C}"),
    ("lsime;", "\u{2A8D}"),
    ("gsime;", "\u{2A8E}"),
    ("lsimg;", "\u{2A8F}"),
    ("gsiml;", "\u{2A90}"),
    ("lgE;", "\u{2A91}"),
    ("glE;", "\u{2A92}"),
    ("lesges;", "\u{2A93}"),
    ("gesles;", "\u{2A94}"),
    ("els;", "\u{2A95}"),
    ("eqslantless;", "\u{2A95}"),
    ("egs;", "\u{2A96}"),
    ("eqslantgtr;", "\u{2A96}"),
    ("elsdot;", "\u{2A97}"),
    ("egsdot;", "\u{2A98}"),
    ("el;", "\u{2A99}"),
    ("eg;", "\u{2A9A}"),
    ("siml;", "\u{2A9D}"),
    ("simg;", "\u{2A9E}"),
    ("simlE;", "\u{2A9F}"),
    ("simgE;", "\u{2AA0}"),
    ("LessLess;", "\u{2AA1}"),
    ("NotNestedLessLess;", "\u{2AA1}\u{0338}"),
    ("GreaterGreater;", "\u{2AA2}"),
    ("NotNestedGreaterGreater;", "\u{2AA2}\u{0338}"),
    ("glj;", "\u{2AA4}"),
    ("gla;", "\u{2AA5}"),
    ("ltcc;", "\u{2AA6}"),
    ("gtcc;", "\u{2AA7}"),
    ("lescc;", "\u{2AA8}"),
    ("gescc;", "\u{2AA9}"),
    ("smt;", "\u{2AAA}"),
    ("lat;", "\u{2AAB}"),
    ("smte;", "\u{2AAC}"),
    ("smtes;", "\u{2AAC}\u{FE00}"),
    ("late;", "\u{2AAD}"),
    ("lates;", "\u{2AAD}\u{FE00}"),
    ("bumpE;", "\u{2AAE}"),
    ("pre;", "\u{2AAF}"),
    ("PrecedesEqual;", "\u{2AAF}"),
    ("preceq;", "\u{2AAF}"),
    ("NotPrecedesEqual;", "\u{2AAF}\u{0338}"),
    ("npre;", "\u{2AAF}\u{0338}"),
    ("npreceq;", "\u{2AAF}\u{0338}"),
    ("sce;", "\u{2AB0}"),
    ("SucceedsEqual;", "\u{2AB0}"),
    ("succeq;", "\u{2AB0}"),
    ("NotSucceedsEqual;", "\u{2AB0}\u{0338}"),
    ("nsce;", "\u{2AB0}\u{0338}"),
    ("nsucceq;", "\u{2AB0}\u{0338}"),
    ("prE;", "\u{2AB3}"),
    ("scE;", "\u{2AB4}"),
    ("precneqq;", "\u{2AB5}"),
    ("prnE;", "\u{2AB5}"),
    ("scnE;", "\u{2AB6}"),
    ("succneqq;", "\u{2AB6}"),
    ("prap;", "\u{2AB7}"),
    ("precapprox;", "\u{2AB7}"),
    ("scap;", "\u{2AB8}"),
    ("succapprox;", "\u{2AB8}"),
    ("precnapprox;", "\u{2AB9}"),
    ("prnap;", "\u{2AB9}"),
    ("scnap;", "\u{2ABA}"),
    ("succnapprox;", "\u{2ABA}"),
    ("Pr;", "\u{2ABB}"),
    ("Sc;", "\u{2ABC}"),
    ("subdot;", "\u{2ABD}"),
    ("supdot;", "\u{2ABE}"),
    ("subplus;", "\u{2ABF}"),
    ("supplus;", "\u{2AC0}"),
    ("submult;", "\u{2AC1}"),
    ("supmult;", "\u{2AC2}"),
    ("subedot;", "\u{2AC3}"),
    ("supedot;", "\u{2AC4}"),
    ("subE;", "\u{2AC5}"),
    ("subseteqq;", "\u{2AC5}"),
    ("nsubE;", "\u{2AC5}\u{0338}"),
    ("nsubseteqq;", "\u{2AC5}\u{0338}"),
    ("supE;", "\u{2AC6}"),
    ("supseteqq;", "\u{2AC6}"),
    ("nsupE;", "\u{2AC6}\u{0338}"),
    ("nsupseteqq;", "\u{2AC6}\u{0338}"),
    ("subsim;", "\u{2AC7}"),
    ("supsim;", "\u{2AC8}"),
    ("subnE;", "\u{2ACB}"),
    ("subsetneqq;", "\u{2ACB}"),
    ("varsubsetneqq;", "\u{2ACB}\u{FE00}"),
    ("vsubnE;", "\u{2ACB}\u{FE00}"),
    ("supnE;", "\u{2ACC}"),
    ("supsetneqq;", "\u{2ACC}"),
    ("varsupsetneqq;", "\u{2ACC}\u{FE00}"),
    ("vsupnE;", "\u{2ACC}\u{FE00}"),
    ("csub;", "\u{2ACF}"),
    ("csup;", "\u{2AD0}"),
    ("csube;", "\u{2AD1}"),
    ("csupe;", "\u{2AD2}"),
    ("subsup;", "\u{2AD3}"),
    ("supsub;", "\u{2AD4}"),
    ("subsub;", "\u{2AD5}"),
    ("supsup;", "\u{2AD6}"),
    ("suphsub;", "\u{2AD7}"),
    ("supdsub;", "\u{2AD8}"),
    ("forkv;", "\u{2AD9}"),
    ("topfork;", "\u{2ADA}"),
    ("mlcp;", "\u{2ADB}"),
    ("Dashv;", "\u{2AE4}"),
    ("DoubleLeftTee;", "\u{2AE4}"),
    ("Vdashl;", "\u{2AE6}"),
    ("Barv;", "\u{2AE7}"),
    ("vBar;", "\u{2AE8}"),
    ("vBarv;", "\u{2AE9}"),
    ("Vbar;", "\u{2AEB}"),
    ("Not;", "\u{2AEC}"),
    ("bNot;", "\u{2AED}"),
    ("rnmid;", "\u{2AEE}"),
    ("cirmid;", "\u{2AEF}"),
    ("midcir;", "\u{2AF0}"),
    ("topcir;", "\u{2AF1}"),
    ("nhpar;", "\u{2AF2}"),
    ("parsim;", "\u{2AF3}"),
    ("parsl;", "\u{2AFD}"),
    ("nparsl;", "\u{2AFD}\u{20E5}"),
    ("fflig;", "\u{FB00}"),
    ("filig;", "\u{FB01}"),
    ("fllig;", "\u{FB02}"),
    ("ffilig;", "\u{FB03}"),
    ("ffllig;", "\u{FB04}"),
    ("Ascr;", "\u{1D49C}"),
    ("Cscr;", "\u{1D49E}"),
    ("Dscr;", "\u{1D49F}"),
    ("Gscr;", "\u{1D4A2}"),
    ("Jscr;", "\u{1D4A5}"),
    ("Kscr;", "\u{1D4A6}"),
    ("Nscr;", "\u{1D4A9}"),
    ("Oscr;", "\u{1D4AA}"),
    ("Pscr;", "\u{1D4AB}"),
    ("Qscr;", "\u{1D4AC}"),
    ("Sscr;", "\u{1D4AE}"),
    ("Tscr;", "\u{1D4AF}"),
    ("Uscr;", "\u{1D4B0}"),
    ("Vscr;", "\u{1D4B1}"),
    ("Wscr;", "\u{1D4B2}"),
    ("Xscr;", "\u{1D4B3}"),
    ("Yscr;", "\u{1D4B4}"),
    ("Zscr;", "\u{1D4B5}"),
    ("ascr;", "\u{1D4B6}"),
    ("bscr;", "\u{1D4B7}"),
    ("cscr;", "\u{1D4B8}"),
    ("dscr;", "\u{1D4B9}"),
    ("fscr;", "\u{1D4BB}"),
    ("hscr;", "\u{1D4BD}"),
    ("iscr;", "\u{1D4BE}"),
    ("jscr;", "\u{1D4BF}"),
    ("kscr;", "\u{1D4C0}"),
    ("lscr;", "\u{1D4C1}"),
    ("mscr;", "\u{1D4C2}"),
    ("nscr;", "\u{1D4C3}"),
    ("pscr;", "\u{1D4C5}"),
    ("qscr;", "\u{1D4C6}"),
    ("rscr;", "\u{1D4C7}"),
    ("sscr;", "\u{1D4C8}"),
    ("tscr;", "\u{1D4C9}"),
    ("uscr;", "\u{1D4CA}"),
    ("vscr;", "\u{1D4CB}"),
    ("wscr;", "\u{1D4CC}"),
    ("xscr;", "\u{1D4CD}"),
    ("yscr;", "\u{1D4CE}"),
    ("zscr;", "\u{1D4CF}"),
    ("Afr;", "\u{1D504}"),
    ("Bfr;", "\u{1D505}"),
    ("Dfr;", "\u{1D507}"),
    ("Efr;", "\u{1D508}"),
    ("Ffr;", "\u{1D509}"),
    ("Gfr;", "\u{1D50A}"),
    ("Jfr;", "\u{1D50D}"),
    ("Kfr;", "\u{1D50E}"),
    ("Lfr;", "\u{1D50F}"),
    ("Mfr;", "\u{1D510}"),
    ("Nfr;", "\u{1D511}"),
    ("Ofr;", "\u{1D512}"),
    ("Pfr;", "\u{1D513}"),
    ("Qfr;", "\u{1D514}"),
    ("Sfr;", "\u{1D516}"),
    ("Tfr;", "\u{1D517}"),
    ("Ufr;", "\u{1D518}"),
    ("Vfr;", "\u{1D519}"),
    ("Wfr;", "\u{1D51A}"),
    ("Xfr;", "\u{1D51B}"),
    ("Yfr;", "\u{1D51C}"),
    ("afr;", "\u{1D51E}"),
    ("bfr;", "\u{1D51F}"),
    ("cfr;", "\u{1D520}"),
    ("dfr;", "\u{1D521}"),
    ("efr;", "\u{1D522}"),
    ("ffr;", "\u{1D523}"),
    ("gfr;", "\u{1D524}"),
    ("hfr;", "\u{1D525}"),
    ("ifr;", "\u{1D526}"),
    ("jfr;", "\u{1D527}"),
    ("kfr;", "\u{1D528}"),
    ("lfr;", "\u{1D529}"),
    ("mfr;", "\u{1D52A}"),
    ("nfr;", "\u{1D52B}"),
    ("ofr;", "\u{1D52C}"),
    ("pfr;", "\u{1D52D}"),
    ("qfr;", "\u{1D52E}"),
    ("rfr;", "\u{1D52F}"),
    ("sfr;", "\u{1D530}"),
    ("tfr;", "\u{1D531}"),
    ("ufr;", "\u{1D532}"),
    ("vfr;", "\u{1D533}"),
    ("wfr;", "\u{1D534}"),
    ("xfr;", "\u{1D535}"),
    ("yfr;", "\u{1D536}"),
    ("zfr;", "\u{1D537}"),
    ("Aopf;", "\u{1D538}"),
    ("Bopf;", "\u{1D539}"),
    ("Dopf;", "\u{1D53B}"),
    ("Eopf;", "\u{1D53C}"),
    ("Fopf;", "\u{1D53D}"),
    ("Gopf;", "\u{1D53E}"),
    ("Iopf;", "\u{1D540}"),
    ("Jopf;", "\u{1D541}"),
    ("Kopf;", "\u{1D542}"),
    ("Lopf;", "\u{1D543}"),
    ("Mopf;", "\u{1D544}"),
    ("Oopf;", "\u{1D546}"),
    ("Sopf;", "\u{1D54A}"),
    ("Topf;", "\u{1D54B}"),
    ("Uopf;", "\u{1D54C}"),
    ("Vopf;", "\u{1D54D}"),
    ("Wopf;", "\u{1D54E}"),
    ("Xopf;", "\u{1D54F}"),
    ("Yopf;", "\u{1D550}"),
    ("aopf;", "\u{1D552}"),
    ("bopf;", "\u{1D553}"),
    ("copf;", "\u{1D554}"),
    ("dopf;", "\u{1D555}"),
    ("eopf;", "\u{1D556}"),
    ("fopf;", "\u{1D557}"),
    ("gopf;", "\u{1D558}"),
    ("hopf;", "\u{1D559}"),
    ("iopf;", "\u{1D55A}"),
    ("jopf;", "\u{1D55B}"),
    ("kopf;", "\u{1D55C}"),
    ("lopf;", "\u{1D55D}"),
    ("mopf;", "\u{1D55E}"),
    ("nopf;", "\u{1D55F}"),
    ("oopf;", "\u{1D560}"),
    ("popf;", "\u{1D561}"),
    ("qopf;", "\u{1D562}"),
    ("ropf;", "\u{1D563}"),
    ("sopf;", "\u{1D564}"),
    ("topf;", "\u{1D565}"),
    ("uopf;", "\u{1D566}"),
    ("vopf;", "\u{1D567}"),
    ("wopf;", "\u{1D568}"),
    ("xopf;", "\u{1D569}"),
    ("yopf;", "\u{1D56A}"),
    ("zopf;", "\u{1D56B}"),
];

/// Names the HTML5 parser also accepts without a trailing `;`.
pub(super) const LEGACY_UNTERMINATED: &[&str] = &[
    "AElig", "AMP", "Aacute", "Acirc", "Agrave", "Aring", "Atilde", "Auml", "COPY", "Ccedil", "ETH",
    "Eacute", "Ecirc", "Egrave", "Euml", "GT", "Iacute", "Icirc", "Igrave", "Iuml", "LT", "Ntilde",
    "Oacute", "Ocirc", "Ograve", "Oslash", "Otilde", "Ouml", "QUOT", "REG", "THORN", "Uacute",
    "Ucirc", "Ugrave", "Uuml", "Yacute", "aacute", "acirc", "acute", "aelig", "agrave", "amp",
    "aring", "atilde", "auml", "brvbar", "ccedil", "cedil", "cent", "copy", "curren", "deg",
    "divide", "eacute", "ecirc", "egrave", "eth", "euml", "frac12", "frac14", "frac34", "gt",
    "iacute", "icirc", "iexcl", "igrave", "iquest", "iuml", "laquo", "lt", "macr", "micro",
    "middot", "nbsp", "not", "ntilde", "oacute", "ocirc", "ograve", "ordf", "ordm", "oslash",
    "otilde", "ouml", "para", "plusmn", "pound", "quot", "raquo", "reg", "sect", "shy", "sup1",
    "sup2", "sup3", "szlig", "thorn", "times", "uacute", "ucirc", "ugrave", "uml", "uuml", "yacute",
    "yen", "yuml",
];
