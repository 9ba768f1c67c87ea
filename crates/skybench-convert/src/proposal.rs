use skybench_model as model;
use skybench_proto as proto;

use crate::scalars::{amount, trip_class};
use crate::{conv_map, conv_vec};

pub(crate) fn proposals(list: &[model::Proposal]) -> proto::Proposals {
    proto::Proposals {
        proposals: conv_vec(list, proposal),
    }
}

pub(crate) fn proposal(proposal: &model::Proposal) -> proto::Proposal {
    proto::Proposal {
        id: proposal.id.clone(),
        price: Some(amount(&proposal.price)),
        price_per_person: Some(amount(&proposal.price_per_person)),
        agent_id: i64::from(proposal.agent_id.get()),
        flight_terms: conv_map(&proposal.flight_terms, |leg| i64::from(leg.get()), flight_term),
        transfer_terms: conv_vec(&proposal.transfer_terms, |terms| proto::TransferTerms {
            terms: conv_vec(terms, transfer_term),
        }),
        unified_price: Some(amount(&proposal.unified_price)),
        options: proposal.options.as_ref().map(proposal_options),
        weight: proposal.weight,
        from_main_airline: proposal.from_main_airline,
        tags: proposal.tags.clone(),
        minimum_fare: Some(fare(&proposal.minimum_fare)),
        is_warmcache: proposal.is_warmcache,
        cashback: proposal.cashback.as_ref().map(cashback),
        cashback_per_person: proposal.cashback_per_person.as_ref().map(cashback),
        accepted_cards: conv_vec(&proposal.accepted_cards, |card| proto::AcceptedCard {
            region: card.region.clone(),
            system: card.system.clone(),
        }),
    }
}

fn flight_term(term: &model::FlightTerm) -> proto::FlightTerm {
    proto::FlightTerm {
        fare_code: term.fare_code.clone(),
        trip_class: trip_class(term.trip_class),
        seats_available: i32::from(term.seats_available),
        marketing_carrier_designator: term
            .marketing_carrier_designator
            .as_ref()
            .map(flight_designator),
        baggage: term.baggage.as_ref().map(baggage),
        handbags: term.handbags.as_ref().map(baggage),
        additional_tariff_info: term.additional_tariff_info.as_ref().map(additional_tariff_info),
        is_charter: term.is_charter,
        tags: term.tags.clone(),
        merged_terms_info: Some(merged_terms_info(&term.merged_terms_info)),
        merged_from_other_proposals: conv_map(
            &term.merged_from_other_proposals,
            |id| id.clone(),
            |n| i64::from(*n),
        ),
    }
}

pub(crate) fn flight_designator(designator: &model::FlightDesignator) -> proto::FlightDesignator {
    proto::FlightDesignator {
        carrier: designator.carrier.to_string(),
        airline_id: designator.airline_id.to_string(),
        number: designator.number.clone(),
    }
}

pub(crate) fn technical_stop(stop: &model::TechnicalStop) -> proto::TechnicalStop {
    proto::TechnicalStop {
        airport_code: stop.airport_code.to_string(),
    }
}

fn baggage(baggage: &model::Baggage) -> proto::Baggage {
    proto::Baggage {
        count: i64::from(baggage.count),
        weight: baggage.weight,
        total_weight: baggage.total_weight,
        length: baggage.length,
        width: baggage.width,
        height: baggage.height,
        sum_dimension: baggage.sum_dimension,
    }
}

fn tariff_info(info: &model::TariffInfo) -> proto::TariffInfo {
    proto::TariffInfo {
        available: info.available,
        penalty: info.penalty.as_ref().map(amount),
        is_from_config: info.is_from_config,
    }
}

fn additional_tariff_info(info: &model::AdditionalTariffInfo) -> proto::AdditionalTariffInfo {
    proto::AdditionalTariffInfo {
        seat_at_purchase_info: info.seat_at_purchase_info.as_ref().map(tariff_info),
        seat_at_registration_info: info.seat_at_registration_info.as_ref().map(tariff_info),
        return_before_flight: info.return_before_flight.as_ref().map(tariff_info),
        return_after_flight: info.return_after_flight.as_ref().map(tariff_info),
        change_before_flight: info.change_before_flight.as_ref().map(tariff_info),
        change_after_flight: info.change_after_flight.as_ref().map(tariff_info),
        fare_name: info.fare_name.clone(),
        miles: info.miles,
    }
}

fn merged_terms_info(info: &model::MergedTermsInfo) -> proto::MergedTermsInfo {
    proto::MergedTermsInfo {
        seat_at_registration: Some(tariff_merge_info(&info.seat_at_registration)),
        seat_at_purchase: Some(tariff_merge_info(&info.seat_at_purchase)),
        return_before_flight: Some(tariff_merge_info(&info.return_before_flight)),
        return_after_flight: Some(tariff_merge_info(&info.return_after_flight)),
        change_before_flight: Some(tariff_merge_info(&info.change_before_flight)),
        change_after_flight: Some(tariff_merge_info(&info.change_after_flight)),
        baggage: Some(baggage_merge_info(&info.baggage)),
        handbags: Some(baggage_merge_info(&info.handbags)),
    }
}

fn tariff_merge_info(info: &model::TariffMergeInfo) -> proto::TariffMergeInfo {
    let params = |params: &model::TariffMergeParams| proto::TariffMergeParams {
        available: params.available,
        penalty_currency_code: params.penalty_currency_code,
        penalty_value: params.penalty_value,
    };
    proto::TariffMergeInfo {
        is_from_config: Some(params(&info.is_from_config)),
        mismatch: Some(params(&info.mismatch)),
    }
}

fn baggage_merge_info(info: &model::BaggageMergeInfo) -> proto::BaggageMergeInfo {
    let params = |params: &model::BaggageMergeParams| proto::BaggageMergeParams {
        count: params.count,
        weight: params.weight,
        total_weight: params.total_weight,
        height: params.height,
        length: params.length,
        width: params.width,
        sum_dimension: params.sum_dimension,
    };
    proto::BaggageMergeInfo {
        is_from_config: Some(params(&info.is_from_config)),
        mismatch: Some(params(&info.mismatch)),
    }
}

fn transfer_term(term: &model::TransferTerm) -> proto::TransferTerm {
    proto::TransferTerm {
        is_virtual_interline: term.is_virtual_interline,
        tags: term.tags.clone(),
    }
}

fn proposal_options(options: &model::ProposalOptions) -> proto::ProposalOptions {
    proto::ProposalOptions {
        hotel: options.hotel.as_ref().map(|hotel| proto::Hotel {
            name: hotel.name.clone(),
            stars: hotel.stars,
            room_type: hotel.room_type.clone(),
            meals: hotel.meals.clone(),
        }),
    }
}

fn fare(fare: &model::Fare) -> proto::Fare {
    proto::Fare {
        code: fare.code.clone(),
        baggage: fare.baggage.as_ref().map(baggage),
        handbags: fare.handbags.as_ref().map(baggage),
        return_before_flight: fare.return_before_flight.as_ref().map(tariff_info),
        return_after_flight: fare.return_after_flight.as_ref().map(tariff_info),
        change_before_flight: fare.change_before_flight.as_ref().map(tariff_info),
        change_after_flight: fare.change_after_flight.as_ref().map(tariff_info),
        seat_at_purchase: fare.seat_at_purchase.as_ref().map(tariff_info),
        seat_at_registration: fare.seat_at_registration.as_ref().map(tariff_info),
        fare_name: fare.fare_name.clone(),
        miles: fare.miles,
    }
}

fn cashback(cashback: &model::Cashback) -> proto::Cashback {
    proto::Cashback {
        localized_amount: cashback.localized_amount.as_ref().map(amount),
        available: cashback.available,
    }
}
