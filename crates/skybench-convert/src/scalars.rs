use std::collections::HashMap;

use skybench_model as model;
use skybench_proto as proto;

use crate::conv_map;

pub(crate) fn currency(code: &model::CurrencyCode) -> i32 {
    proto::Currency::from_code(code.as_str()).into()
}

pub(crate) fn amount(amount: &model::Amount) -> proto::Amount {
    proto::Amount {
        currency_code: currency(&amount.currency_code),
        value: amount.value,
    }
}

pub(crate) fn localizable(name: &model::LocalizableString) -> HashMap<String, proto::MapStringString> {
    conv_map(
        name,
        |language| language.to_string(),
        |forms| proto::MapStringString { map: forms.clone() },
    )
}

pub(crate) fn pointer_bool(value: model::PointerBool) -> proto::OptBool {
    proto::OptBool {
        value: value.is_true(),
        is_unknown: value.is_unknown(),
    }
}

pub(crate) fn trip_class(value: model::TripClass) -> i32 {
    let mapped = match value {
        model::TripClass::Economy => proto::TripClass::Economy,
        model::TripClass::PremiumEconomy => proto::TripClass::PremiumEconomy,
        model::TripClass::Business => proto::TripClass::Business,
        model::TripClass::First => proto::TripClass::First,
    };
    mapped.into()
}

pub(crate) fn source_kind(value: model::SourceKind) -> i32 {
    let mapped = match value {
        model::SourceKind::Organic => proto::SourceKind::Organic,
        model::SourceKind::Metasearch => proto::SourceKind::Metasearch,
        model::SourceKind::Affiliate => proto::SourceKind::Affiliate,
    };
    mapped.into()
}

pub(crate) fn order(value: model::Order) -> i32 {
    let mapped = match value {
        model::Order::Cheapest => proto::Order::Cheapest,
        model::Order::Fastest => proto::Order::Fastest,
        model::Order::Best => proto::Order::Best,
    };
    mapped.into()
}

pub(crate) fn brand(value: model::Brand) -> i32 {
    let mapped = match value {
        model::Brand::Primary => proto::Brand::Primary,
        model::Brand::WhiteLabel => proto::Brand::WhiteLabel,
    };
    mapped.into()
}

pub(crate) fn term_source(value: model::TermSource) -> i32 {
    let mapped = match value {
        model::TermSource::Unknown => proto::TermSource::Unknown,
        model::TermSource::Gate => proto::TermSource::Gate,
        model::TermSource::Config => proto::TermSource::Config,
        model::TermSource::Merged => proto::TermSource::Merged,
    };
    mapped.into()
}

pub(crate) fn equipment_type(value: model::EquipmentType) -> i32 {
    let mapped = match value {
        model::EquipmentType::Unknown => proto::EquipmentType::Unknown,
        model::EquipmentType::Plane => proto::EquipmentType::Plane,
        model::EquipmentType::Helicopter => proto::EquipmentType::Helicopter,
        model::EquipmentType::Bus => proto::EquipmentType::Bus,
        model::EquipmentType::Train => proto::EquipmentType::Train,
        model::EquipmentType::Ship => proto::EquipmentType::Ship,
    };
    mapped.into()
}

#[cfg(test)]
mod tests {
    use skybench_model as model;
    use skybench_proto as proto;

    use super::{amount, equipment_type, pointer_bool, trip_class};

    #[test]
    fn enums_keep_their_numeric_codes() {
        for value in [
            model::TripClass::Economy,
            model::TripClass::PremiumEconomy,
            model::TripClass::Business,
            model::TripClass::First,
        ] {
            assert_eq!(trip_class(value), value.code());
        }
        assert_eq!(
            equipment_type(model::EquipmentType::Train),
            i32::from(proto::EquipmentType::Train)
        );
    }

    #[test]
    fn unknown_currency_maps_to_unspecified() {
        let converted = amount(&model::Amount::new("ZZZ", 3.5));
        assert_eq!(converted.currency_code(), proto::Currency::Unspecified);
        assert_eq!(converted.value, 3.5);

        let known = amount(&model::Amount::new("USD", 1.0));
        assert_eq!(known.currency_code(), proto::Currency::Usd);
    }

    #[test]
    fn pointer_bool_keeps_unknown_state() {
        let unknown = pointer_bool(model::PointerBool::UNKNOWN);
        assert!(unknown.is_unknown);
        assert!(!unknown.value);

        let known = pointer_bool(model::PointerBool::known(true));
        assert!(!known.is_unknown);
        assert!(known.value);
    }
}
