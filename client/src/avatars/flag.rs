use std::str::FromStr;

use super::{Endpoint, IconOptions, Prepared};
use crate::path::PathTemplate;

/// Countries with a flag on the service, by ISO 3166-1 alpha-2 code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flag {
    Afghanistan,
    Angola,
    Albania,
    Andorra,
    UnitedArabEmirates,
    Argentina,
    Armenia,
    AntiguaAndBarbuda,
    Australia,
    Austria,
    Azerbaijan,
    Burundi,
    Belgium,
    Benin,
    BurkinaFaso,
    Bangladesh,
    Bulgaria,
    Bahrain,
    Bahamas,
    BosniaAndHerzegovina,
    Belarus,
    Belize,
    Bolivia,
    Brazil,
    Barbados,
    BruneiDarussalam,
    Bhutan,
    Botswana,
    CentralAfricanRepublic,
    Canada,
    Switzerland,
    Chile,
    China,
    CoteDIvoire,
    Cameroon,
    DemocraticRepublicOfTheCongo,
    RepublicOfTheCongo,
    Colombia,
    Comoros,
    CapeVerde,
    CostaRica,
    Cuba,
    Cyprus,
    CzechRepublic,
    Germany,
    Djibouti,
    Dominica,
    Denmark,
    DominicanRepublic,
    Algeria,
    Ecuador,
    Egypt,
    Eritrea,
    Spain,
    Estonia,
    Ethiopia,
    Finland,
    Fiji,
    France,
    Micronesia,
    Gabon,
    UnitedKingdom,
    Georgia,
    Ghana,
    Guinea,
    Gambia,
    GuineaBissau,
    EquatorialGuinea,
    Greece,
    Grenada,
    Guatemala,
    Guyana,
    Honduras,
    Croatia,
    Haiti,
    Hungary,
    Indonesia,
    India,
    Ireland,
    Iran,
    Iraq,
    Iceland,
    Israel,
    Italy,
    Jamaica,
    Jordan,
    Japan,
    Kazakhstan,
    Kenya,
    Kyrgyzstan,
    Cambodia,
    Kiribati,
    SaintKittsAndNevis,
    SouthKorea,
    Kuwait,
    Laos,
    Lebanon,
    Liberia,
    Libya,
    SaintLucia,
    Liechtenstein,
    SriLanka,
    Lesotho,
    Lithuania,
    Luxembourg,
    Latvia,
    Morocco,
    Monaco,
    Moldova,
    Madagascar,
    Maldives,
    Mexico,
    MarshallIslands,
    NorthMacedonia,
    Mali,
    Malta,
    Myanmar,
    Montenegro,
    Mongolia,
    Mozambique,
    Mauritania,
    Mauritius,
    Malawi,
    Malaysia,
    Namibia,
    Niger,
    Nigeria,
    Nicaragua,
    Netherlands,
    Norway,
    Nepal,
    Nauru,
    NewZealand,
    Oman,
    Pakistan,
    Panama,
    Peru,
    Philippines,
    Palau,
    PapuaNewGuinea,
    Poland,
    FrenchPolynesia,
    NorthKorea,
    Portugal,
    Paraguay,
    Qatar,
    Romania,
    Russia,
    Rwanda,
    SaudiArabia,
    Sudan,
    Senegal,
    Singapore,
    SolomonIslands,
    SierraLeone,
    ElSalvador,
    SanMarino,
    Somalia,
    Serbia,
    SouthSudan,
    SaoTomeAndPrincipe,
    Suriname,
    Slovakia,
    Slovenia,
    Sweden,
    Eswatini,
    Seychelles,
    Syria,
    Chad,
    Togo,
    Thailand,
    Tajikistan,
    Turkmenistan,
    TimorLeste,
    Tonga,
    TrinidadAndTobago,
    Tunisia,
    Turkey,
    Tuvalu,
    Tanzania,
    Uganda,
    Ukraine,
    Uruguay,
    UnitedStates,
    Uzbekistan,
    VaticanCity,
    SaintVincentAndTheGrenadines,
    Venezuela,
    Vietnam,
    Vanuatu,
    Samoa,
    Yemen,
    SouthAfrica,
    Zambia,
    Zimbabwe,
}

impl Flag {
    pub const ALL: [Flag; 195] = [
        Self::Afghanistan,
        Self::Angola,
        Self::Albania,
        Self::Andorra,
        Self::UnitedArabEmirates,
        Self::Argentina,
        Self::Armenia,
        Self::AntiguaAndBarbuda,
        Self::Australia,
        Self::Austria,
        Self::Azerbaijan,
        Self::Burundi,
        Self::Belgium,
        Self::Benin,
        Self::BurkinaFaso,
        Self::Bangladesh,
        Self::Bulgaria,
        Self::Bahrain,
        Self::Bahamas,
        Self::BosniaAndHerzegovina,
        Self::Belarus,
        Self::Belize,
        Self::Bolivia,
        Self::Brazil,
        Self::Barbados,
        Self::BruneiDarussalam,
        Self::Bhutan,
        Self::Botswana,
        Self::CentralAfricanRepublic,
        Self::Canada,
        Self::Switzerland,
        Self::Chile,
        Self::China,
        Self::CoteDIvoire,
        Self::Cameroon,
        Self::DemocraticRepublicOfTheCongo,
        Self::RepublicOfTheCongo,
        Self::Colombia,
        Self::Comoros,
        Self::CapeVerde,
        Self::CostaRica,
        Self::Cuba,
        Self::Cyprus,
        Self::CzechRepublic,
        Self::Germany,
        Self::Djibouti,
        Self::Dominica,
        Self::Denmark,
        Self::DominicanRepublic,
        Self::Algeria,
        Self::Ecuador,
        Self::Egypt,
        Self::Eritrea,
        Self::Spain,
        Self::Estonia,
        Self::Ethiopia,
        Self::Finland,
        Self::Fiji,
        Self::France,
        Self::Micronesia,
        Self::Gabon,
        Self::UnitedKingdom,
        Self::Georgia,
        Self::Ghana,
        Self::Guinea,
        Self::Gambia,
        Self::GuineaBissau,
        Self::EquatorialGuinea,
        Self::Greece,
        Self::Grenada,
        Self::Guatemala,
        Self::Guyana,
        Self::Honduras,
        Self::Croatia,
        Self::Haiti,
        Self::Hungary,
        Self::Indonesia,
        Self::India,
        Self::Ireland,
        Self::Iran,
        Self::Iraq,
        Self::Iceland,
        Self::Israel,
        Self::Italy,
        Self::Jamaica,
        Self::Jordan,
        Self::Japan,
        Self::Kazakhstan,
        Self::Kenya,
        Self::Kyrgyzstan,
        Self::Cambodia,
        Self::Kiribati,
        Self::SaintKittsAndNevis,
        Self::SouthKorea,
        Self::Kuwait,
        Self::Laos,
        Self::Lebanon,
        Self::Liberia,
        Self::Libya,
        Self::SaintLucia,
        Self::Liechtenstein,
        Self::SriLanka,
        Self::Lesotho,
        Self::Lithuania,
        Self::Luxembourg,
        Self::Latvia,
        Self::Morocco,
        Self::Monaco,
        Self::Moldova,
        Self::Madagascar,
        Self::Maldives,
        Self::Mexico,
        Self::MarshallIslands,
        Self::NorthMacedonia,
        Self::Mali,
        Self::Malta,
        Self::Myanmar,
        Self::Montenegro,
        Self::Mongolia,
        Self::Mozambique,
        Self::Mauritania,
        Self::Mauritius,
        Self::Malawi,
        Self::Malaysia,
        Self::Namibia,
        Self::Niger,
        Self::Nigeria,
        Self::Nicaragua,
        Self::Netherlands,
        Self::Norway,
        Self::Nepal,
        Self::Nauru,
        Self::NewZealand,
        Self::Oman,
        Self::Pakistan,
        Self::Panama,
        Self::Peru,
        Self::Philippines,
        Self::Palau,
        Self::PapuaNewGuinea,
        Self::Poland,
        Self::FrenchPolynesia,
        Self::NorthKorea,
        Self::Portugal,
        Self::Paraguay,
        Self::Qatar,
        Self::Romania,
        Self::Russia,
        Self::Rwanda,
        Self::SaudiArabia,
        Self::Sudan,
        Self::Senegal,
        Self::Singapore,
        Self::SolomonIslands,
        Self::SierraLeone,
        Self::ElSalvador,
        Self::SanMarino,
        Self::Somalia,
        Self::Serbia,
        Self::SouthSudan,
        Self::SaoTomeAndPrincipe,
        Self::Suriname,
        Self::Slovakia,
        Self::Slovenia,
        Self::Sweden,
        Self::Eswatini,
        Self::Seychelles,
        Self::Syria,
        Self::Chad,
        Self::Togo,
        Self::Thailand,
        Self::Tajikistan,
        Self::Turkmenistan,
        Self::TimorLeste,
        Self::Tonga,
        Self::TrinidadAndTobago,
        Self::Tunisia,
        Self::Turkey,
        Self::Tuvalu,
        Self::Tanzania,
        Self::Uganda,
        Self::Ukraine,
        Self::Uruguay,
        Self::UnitedStates,
        Self::Uzbekistan,
        Self::VaticanCity,
        Self::SaintVincentAndTheGrenadines,
        Self::Venezuela,
        Self::Vietnam,
        Self::Vanuatu,
        Self::Samoa,
        Self::Yemen,
        Self::SouthAfrica,
        Self::Zambia,
        Self::Zimbabwe,
    ];
}

impl AsRef<str> for Flag {
    fn as_ref(&self) -> &str {
        match self {
            Self::Afghanistan => "af",
            Self::Angola => "ao",
            Self::Albania => "al",
            Self::Andorra => "ad",
            Self::UnitedArabEmirates => "ae",
            Self::Argentina => "ar",
            Self::Armenia => "am",
            Self::AntiguaAndBarbuda => "ag",
            Self::Australia => "au",
            Self::Austria => "at",
            Self::Azerbaijan => "az",
            Self::Burundi => "bi",
            Self::Belgium => "be",
            Self::Benin => "bj",
            Self::BurkinaFaso => "bf",
            Self::Bangladesh => "bd",
            Self::Bulgaria => "bg",
            Self::Bahrain => "bh",
            Self::Bahamas => "bs",
            Self::BosniaAndHerzegovina => "ba",
            Self::Belarus => "by",
            Self::Belize => "bz",
            Self::Bolivia => "bo",
            Self::Brazil => "br",
            Self::Barbados => "bb",
            Self::BruneiDarussalam => "bn",
            Self::Bhutan => "bt",
            Self::Botswana => "bw",
            Self::CentralAfricanRepublic => "cf",
            Self::Canada => "ca",
            Self::Switzerland => "ch",
            Self::Chile => "cl",
            Self::China => "cn",
            Self::CoteDIvoire => "ci",
            Self::Cameroon => "cm",
            Self::DemocraticRepublicOfTheCongo => "cd",
            Self::RepublicOfTheCongo => "cg",
            Self::Colombia => "co",
            Self::Comoros => "km",
            Self::CapeVerde => "cv",
            Self::CostaRica => "cr",
            Self::Cuba => "cu",
            Self::Cyprus => "cy",
            Self::CzechRepublic => "cz",
            Self::Germany => "de",
            Self::Djibouti => "dj",
            Self::Dominica => "dm",
            Self::Denmark => "dk",
            Self::DominicanRepublic => "do",
            Self::Algeria => "dz",
            Self::Ecuador => "ec",
            Self::Egypt => "eg",
            Self::Eritrea => "er",
            Self::Spain => "es",
            Self::Estonia => "ee",
            Self::Ethiopia => "et",
            Self::Finland => "fi",
            Self::Fiji => "fj",
            Self::France => "fr",
            Self::Micronesia => "fm",
            Self::Gabon => "ga",
            Self::UnitedKingdom => "gb",
            Self::Georgia => "ge",
            Self::Ghana => "gh",
            Self::Guinea => "gn",
            Self::Gambia => "gm",
            Self::GuineaBissau => "gw",
            Self::EquatorialGuinea => "gq",
            Self::Greece => "gr",
            Self::Grenada => "gd",
            Self::Guatemala => "gt",
            Self::Guyana => "gy",
            Self::Honduras => "hn",
            Self::Croatia => "hr",
            Self::Haiti => "ht",
            Self::Hungary => "hu",
            Self::Indonesia => "id",
            Self::India => "in",
            Self::Ireland => "ie",
            Self::Iran => "ir",
            Self::Iraq => "iq",
            Self::Iceland => "is",
            Self::Israel => "il",
            Self::Italy => "it",
            Self::Jamaica => "jm",
            Self::Jordan => "jo",
            Self::Japan => "jp",
            Self::Kazakhstan => "kz",
            Self::Kenya => "ke",
            Self::Kyrgyzstan => "kg",
            Self::Cambodia => "kh",
            Self::Kiribati => "ki",
            Self::SaintKittsAndNevis => "kn",
            Self::SouthKorea => "kr",
            Self::Kuwait => "kw",
            Self::Laos => "la",
            Self::Lebanon => "lb",
            Self::Liberia => "lr",
            Self::Libya => "ly",
            Self::SaintLucia => "lc",
            Self::Liechtenstein => "li",
            Self::SriLanka => "lk",
            Self::Lesotho => "ls",
            Self::Lithuania => "lt",
            Self::Luxembourg => "lu",
            Self::Latvia => "lv",
            Self::Morocco => "ma",
            Self::Monaco => "mc",
            Self::Moldova => "md",
            Self::Madagascar => "mg",
            Self::Maldives => "mv",
            Self::Mexico => "mx",
            Self::MarshallIslands => "mh",
            Self::NorthMacedonia => "mk",
            Self::Mali => "ml",
            Self::Malta => "mt",
            Self::Myanmar => "mm",
            Self::Montenegro => "me",
            Self::Mongolia => "mn",
            Self::Mozambique => "mz",
            Self::Mauritania => "mr",
            Self::Mauritius => "mu",
            Self::Malawi => "mw",
            Self::Malaysia => "my",
            Self::Namibia => "na",
            Self::Niger => "ne",
            Self::Nigeria => "ng",
            Self::Nicaragua => "ni",
            Self::Netherlands => "nl",
            Self::Norway => "no",
            Self::Nepal => "np",
            Self::Nauru => "nr",
            Self::NewZealand => "nz",
            Self::Oman => "om",
            Self::Pakistan => "pk",
            Self::Panama => "pa",
            Self::Peru => "pe",
            Self::Philippines => "ph",
            Self::Palau => "pw",
            Self::PapuaNewGuinea => "pg",
            Self::Poland => "pl",
            Self::FrenchPolynesia => "pf",
            Self::NorthKorea => "kp",
            Self::Portugal => "pt",
            Self::Paraguay => "py",
            Self::Qatar => "qa",
            Self::Romania => "ro",
            Self::Russia => "ru",
            Self::Rwanda => "rw",
            Self::SaudiArabia => "sa",
            Self::Sudan => "sd",
            Self::Senegal => "sn",
            Self::Singapore => "sg",
            Self::SolomonIslands => "sb",
            Self::SierraLeone => "sl",
            Self::ElSalvador => "sv",
            Self::SanMarino => "sm",
            Self::Somalia => "so",
            Self::Serbia => "rs",
            Self::SouthSudan => "ss",
            Self::SaoTomeAndPrincipe => "st",
            Self::Suriname => "sr",
            Self::Slovakia => "sk",
            Self::Slovenia => "si",
            Self::Sweden => "se",
            Self::Eswatini => "sz",
            Self::Seychelles => "sc",
            Self::Syria => "sy",
            Self::Chad => "td",
            Self::Togo => "tg",
            Self::Thailand => "th",
            Self::Tajikistan => "tj",
            Self::Turkmenistan => "tm",
            Self::TimorLeste => "tl",
            Self::Tonga => "to",
            Self::TrinidadAndTobago => "tt",
            Self::Tunisia => "tn",
            Self::Turkey => "tr",
            Self::Tuvalu => "tv",
            Self::Tanzania => "tz",
            Self::Uganda => "ug",
            Self::Ukraine => "ua",
            Self::Uruguay => "uy",
            Self::UnitedStates => "us",
            Self::Uzbekistan => "uz",
            Self::VaticanCity => "va",
            Self::SaintVincentAndTheGrenadines => "vc",
            Self::Venezuela => "ve",
            Self::Vietnam => "vn",
            Self::Vanuatu => "vu",
            Self::Samoa => "ws",
            Self::Yemen => "ye",
            Self::SouthAfrica => "za",
            Self::Zambia => "zm",
            Self::Zimbabwe => "zw",
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl FromStr for Flag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|item| item.as_ref() == s)
            .ok_or_else(|| format!("unexpected country code {s:?}"))
    }
}

/// Country flag, `code` being a ISO 3166-1 alpha-2 country code like `fr`, or a [`Flag`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlagIcon {
    pub code: Option<String>,
    pub options: IconOptions,
}

impl FlagIcon {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self {
            code: Some(code.as_ref().to_string()),
            options: IconOptions::default(),
        }
    }

    pub fn with_options(mut self, options: IconOptions) -> Self {
        self.options = options;
        self
    }
}

impl Endpoint for FlagIcon {
    const TEMPLATE: PathTemplate = PathTemplate::new("/avatars/flags/{code}");

    fn prepare(&self) -> crate::Result<Prepared<'_>> {
        let code = super::require_segment("code", &self.code)?;
        Ok(Prepared::new(self.options.params()).with_path_value("code", code))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use similar_asserts::assert_eq;

    use super::{Flag, FlagIcon};
    use crate::{Error, IconOptions};

    #[test]
    fn should_build_with_height_only() {
        let request = FlagIcon::new("jp").with_options(IconOptions::default().with_height(48));
        let url = crate::avatars::test_avatars().url(&request).unwrap();
        assert_eq!(
            url.as_str(),
            "https://x.io/v1/avatars/flags/jp?height=48&project=p1"
        );
    }

    #[test]
    fn missing_code_should_fail() {
        let err = crate::avatars::test_avatars()
            .url(&FlagIcon::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter: \"code\"");
    }

    #[test]
    fn should_escape_code() {
        let url = crate::avatars::test_avatars()
            .flag("../admin", None, None, None)
            .unwrap();
        assert_eq!(url.path(), "/v1/avatars/flags/..%2Fadmin");
    }

    #[test]
    fn dot_segment_code_should_fail() {
        let avatars = crate::avatars::test_avatars();
        for code in [".", ".."] {
            let err = avatars.flag(code, None, None, None).unwrap_err();
            assert!(matches!(err, Error::InvalidPathValue { ref name, .. } if name == "code"));
        }
    }

    #[test]
    fn codes_should_round_trip() {
        for item in Flag::ALL {
            assert_eq!(item.as_ref().len(), 2);
            assert_eq!(Flag::from_str(item.as_ref()), Ok(item));
        }
        assert!(Flag::from_str("xx").is_err());
    }

    #[test]
    fn should_build_with_enum() {
        let url = crate::avatars::test_avatars()
            .url(&FlagIcon::new(Flag::NewZealand))
            .unwrap();
        assert_eq!(url.as_str(), "https://x.io/v1/avatars/flags/nz?project=p1");
    }

    #[test]
    fn empty_code_should_fail() {
        let err = crate::avatars::test_avatars()
            .flag("", Some(10), None, None)
            .unwrap_err();
        assert!(matches!(err, Error::MissingParameter("code")));
    }
}
