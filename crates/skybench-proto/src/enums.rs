/// ISO 4217 currencies known to the message schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Currency {
    Unspecified = 0,
    Rub = 1,
    Usd = 2,
    Eur = 3,
    Gbp = 4,
    Kzt = 5,
    Uah = 6,
    Byn = 7,
    Try = 8,
    Cny = 9,
    Jpy = 10,
    Aed = 11,
    Thb = 12,
    Inr = 13,
    Uzs = 14,
    Amd = 15,
    Gel = 16,
    Azn = 17,
    Kgs = 18,
    Pln = 19,
    Czk = 20,
    Chf = 21,
    Ils = 22,
    Brl = 23,
}

const CURRENCY_CODES: [(Currency, &str); 23] = [
    (Currency::Rub, "RUB"),
    (Currency::Usd, "USD"),
    (Currency::Eur, "EUR"),
    (Currency::Gbp, "GBP"),
    (Currency::Kzt, "KZT"),
    (Currency::Uah, "UAH"),
    (Currency::Byn, "BYN"),
    (Currency::Try, "TRY"),
    (Currency::Cny, "CNY"),
    (Currency::Jpy, "JPY"),
    (Currency::Aed, "AED"),
    (Currency::Thb, "THB"),
    (Currency::Inr, "INR"),
    (Currency::Uzs, "UZS"),
    (Currency::Amd, "AMD"),
    (Currency::Gel, "GEL"),
    (Currency::Azn, "AZN"),
    (Currency::Kgs, "KGS"),
    (Currency::Pln, "PLN"),
    (Currency::Czk, "CZK"),
    (Currency::Chf, "CHF"),
    (Currency::Ils, "ILS"),
    (Currency::Brl, "BRL"),
];

impl Currency {
    /// Looks up an ISO code, ignoring ASCII case. Unknown codes map to
    /// [`Currency::Unspecified`].
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        CURRENCY_CODES
            .iter()
            .find(|(_, known)| known.eq_ignore_ascii_case(code))
            .map_or(Self::Unspecified, |(currency, _)| *currency)
    }

    /// ISO code, or `None` for [`Currency::Unspecified`].
    #[must_use]
    pub fn as_code(self) -> Option<&'static str> {
        CURRENCY_CODES
            .iter()
            .find(|(currency, _)| *currency == self)
            .map(|(_, code)| *code)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TripClass {
    Economy = 0,
    PremiumEconomy = 1,
    Business = 2,
    First = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SourceKind {
    Organic = 0,
    Metasearch = 1,
    Affiliate = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Order {
    Cheapest = 0,
    Fastest = 1,
    Best = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Brand {
    Primary = 0,
    WhiteLabel = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TermSource {
    Unknown = 0,
    Gate = 1,
    Config = 2,
    Merged = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum EquipmentType {
    Unknown = 0,
    Plane = 1,
    Helicopter = 2,
    Bus = 3,
    Train = 4,
    Ship = 5,
}

#[cfg(test)]
mod tests {
    use super::Currency;

    #[test]
    fn currency_codes_resolve_case_insensitively() {
        assert_eq!(Currency::from_code("RUB"), Currency::Rub);
        assert_eq!(Currency::from_code("eur"), Currency::Eur);
        assert_eq!(Currency::Usd.as_code(), Some("USD"));
    }

    #[test]
    fn unknown_currency_is_unspecified() {
        assert_eq!(Currency::from_code("XXX"), Currency::Unspecified);
        assert_eq!(Currency::from_code(""), Currency::Unspecified);
        assert_eq!(Currency::Unspecified.as_code(), None);
        assert_eq!(i32::from(Currency::Unspecified), 0);
    }
}
