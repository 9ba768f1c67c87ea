use skybench_model::filter as model;
use skybench_proto::filter as proto;

use crate::{conv_map, conv_vec};

fn filter_price(price: &model::FilterPrice) -> proto::FilterPrice {
    proto::FilterPrice {
        enable_min_price: price.enable_min_price,
        disable_min_price: price.disable_min_price,
    }
}

fn filter_bool(value: &model::FilterBool) -> proto::FilterBool {
    proto::FilterBool {
        enable_min_price: value.enable_min_price,
        disable_min_price: value.disable_min_price,
    }
}

fn price_boundaries(range: &model::PriceRange) -> proto::PriceBoundaries {
    proto::PriceBoundaries {
        min: range.min,
        max: range.max,
    }
}

fn range(range: &model::Range) -> proto::Range {
    proto::Range {
        min: range.min,
        max: range.max,
    }
}

fn transfer_duration(
    boundaries: &model::TransferDurationBoundaries,
) -> proto::TransferDurationBoundaries {
    proto::TransferDurationBoundaries {
        min: boundaries.min,
        max: boundaries.max,
    }
}

fn range_boundaries(boundaries: &model::RangeBoundaries) -> proto::RangeBoundaries {
    proto::RangeBoundaries {
        min: boundaries.min,
        max: boundaries.max,
        buckets: boundaries.buckets.clone(),
        bucket_width: boundaries.bucket_width,
    }
}

fn date_time_range_boundaries(
    boundaries: &model::DateTimeRangeBoundaries,
) -> proto::DateTimeRangeBoundaries {
    proto::DateTimeRangeBoundaries {
        min: boundaries.min.to_string(),
        max: boundaries.max.to_string(),
        buckets: conv_map(&boundaries.buckets, |at| at.to_string(), |weight| *weight),
        bucket_width: boundaries.bucket_width,
    }
}

pub(crate) fn degraded_boundaries(bound: &model::DegradedBoundaries) -> proto::DegradedBoundaries {
    let ticket = |ticket: &model::DegradedTicketBoundaries| proto::DegradedReturnTicketBoundaries {
        available: ticket.available.as_ref().map(filter_price),
        free: ticket.free.as_ref().map(filter_price),
    };

    proto::DegradedBoundaries {
        agents: conv_map(&bound.agents, |id| i64::from(id.get()), filter_price),
        airlines: conv_map(&bound.airlines, |iata| iata.to_string(), filter_price),
        alliances: conv_map(&bound.alliances, |id| i64::from(id.get()), filter_price),
        has_interlines: bound.has_interlines.as_ref().map(filter_bool),
        has_lowcosts: bound.has_lowcosts.as_ref().map(filter_bool),
        airports: conv_map(&bound.airports, |leg| i64::from(leg.get()), |airports| {
            proto::DegradedAirportsBoundaries {
                arrival: conv_map(&airports.arrival, |code| code.to_string(), filter_price),
                departure: conv_map(&airports.departure, |code| code.to_string(), filter_price),
            }
        }),
        same_departure_arrival_airport: conv_map(
            &bound.same_departure_arrival_airport,
            |code| code.to_string(),
            filter_price,
        ),
        baggage: bound.baggage.as_ref().map(|baggage| proto::FilterBaggageBoundaries {
            full_baggage: baggage.full_baggage.as_ref().map(filter_price),
            no_baggage: baggage.no_baggage.as_ref().map(filter_price),
            large_handbag: baggage.large_handbag.as_ref().map(filter_price),
        }),
        equipments: conv_map(&bound.equipments, |code| code.clone(), filter_price),
        payment_methods: conv_map(&bound.payment_methods, |method| method.clone(), filter_price),
        price: bound.price.as_ref().map(price_boundaries),
        departure_arrival_time: conv_map(
            &bound.departure_arrival_time,
            |leg| i64::from(leg.get()),
            |times| proto::DegradedTimeBoundaries {
                arrival_date: conv_map(&times.arrival_date, |date| date.to_string(), filter_price),
                arrival_time: times.arrival_time.as_ref().map(date_time_range_boundaries),
                departure_time: times.departure_time.as_ref().map(date_time_range_boundaries),
                trip_duration: times.trip_duration.as_ref().map(range_boundaries),
            },
        ),
        return_ticket: bound.return_ticket.as_ref().map(ticket),
        change_ticket: bound.change_ticket.as_ref().map(ticket),
        transfers_count: conv_map(&bound.transfers_count, |count| count.get(), filter_price),
        transfers_duration: bound.transfers_duration.as_ref().map(transfer_duration),
        transfers_airports: conv_map(&bound.transfers_airports, |code| code.to_string(), filter_price),
        transfers_countries: conv_map(&bound.transfers_countries, |code| code.clone(), filter_price),
        has_transfers_with_airport_change: bound
            .has_transfers_with_airport_change
            .as_ref()
            .map(filter_bool),
        has_transfers_with_baggage_recheck: bound
            .has_transfers_with_baggage_recheck
            .as_ref()
            .map(filter_bool),
        has_transfers_with_visa: bound.has_transfers_with_visa.as_ref().map(filter_bool),
        has_transfers_with_virtual_interline: bound
            .has_transfers_with_virtual_interline
            .as_ref()
            .map(filter_bool),
        has_covid_restrictions: bound.has_covid_restrictions.as_ref().map(filter_bool),
        has_night_transfers: bound.has_night_transfers.as_ref().map(filter_bool),
        has_convenient_transfers: bound.has_convenient_transfers.as_ref().map(filter_bool),
        has_short_layover_transfers: bound.has_short_layover_transfers.as_ref().map(filter_bool),
        has_long_layover_transfers: bound.has_long_layover_transfers.as_ref().map(filter_bool),
    }
}

pub(crate) fn boundaries(bound: &model::Boundaries) -> proto::Boundaries {
    proto::Boundaries {
        agents: conv_map(&bound.agents, |id| i64::from(id.get()), |price| *price),
        airlines: conv_map(&bound.airlines, |iata| iata.to_string(), |price| *price),
        alliances: conv_map(&bound.alliances, |id| i64::from(id.get()), |price| *price),
        has_interlines: bound.has_interlines,
        has_lowcosts: bound.has_lowcosts,
        airports: conv_map(&bound.airports, |leg| i64::from(leg.get()), |airports| {
            proto::AirportsBoundaries {
                arrival: conv_map(&airports.arrival, |code| code.to_string(), |price| *price),
                departure: conv_map(&airports.departure, |code| code.to_string(), |price| *price),
            }
        }),
        same_departure_arrival_airport: conv_map(
            &bound.same_departure_arrival_airport,
            |code| code.to_string(),
            |price| *price,
        ),
        baggage: Some(proto::BaggageBoundaries {
            full_baggage: bound.baggage.full_baggage,
            no_baggage: bound.baggage.no_baggage,
            large_handbag: bound.baggage.large_handbag,
        }),
        equipments: bound.equipments.clone(),
        payment_methods: bound.payment_methods.clone(),
        price: Some(price_boundaries(&bound.price)),
        departure_arrival_time: conv_map(
            &bound.departure_arrival_time,
            |leg| i64::from(leg.get()),
            |times| proto::TimeBoundaries {
                arrival_date: conv_map(&times.arrival_date, |date| date.to_string(), |price| *price),
                arrival_time: Some(date_time_range_boundaries(&times.arrival_time)),
                departure_time: Some(date_time_range_boundaries(&times.departure_time)),
                trip_duration: Some(range_boundaries(&times.trip_duration)),
            },
        ),
        return_ticket: Some(proto::ReturnBoundaries {
            available: bound.return_ticket.available,
            free: bound.return_ticket.free,
        }),
        change_ticket: Some(proto::ChangeBoundaries {
            available: bound.change_ticket.available,
            free: bound.change_ticket.free,
        }),
        transfers_count: conv_map(&bound.transfers_count, |count| count.get(), |price| *price),
        transfers_duration: bound.transfers_duration.as_ref().map(transfer_duration),
        transfers_airports: conv_map(&bound.transfers_airports, |code| code.to_string(), |price| *price),
        transfers_countries: bound.transfers_countries.clone(),
        has_transfers_with_airport_change: bound.has_transfers_with_airport_change,
        has_transfers_with_baggage_recheck: bound.has_transfers_with_baggage_recheck,
        has_transfers_with_visa: bound.has_transfers_with_visa,
        has_transfers_with_virtual_interline: bound.has_transfers_with_virtual_interline,
        has_covid_restrictions: bound.has_covid_restrictions,
        has_night_transfers: bound.has_night_transfers,
        has_convenient_transfers: bound.has_convenient_transfers,
        has_short_layover_transfers: bound.has_short_layover_transfers,
        has_long_layover_transfers: bound.has_long_layover_transfers,
    }
}

pub(crate) fn filter_state(state: &model::FilterState) -> proto::FilterState {
    proto::FilterState {
        agents: conv_vec(&state.agents, |id| i64::from(id.get())),
        airlines: state.airlines.clone(),
        alliances: conv_vec(&state.alliances, |id| i64::from(id.get())),
        without_interlines: state.without_interlines,
        without_lowcosts: state.without_lowcosts,
        segments: conv_map(&state.segments, |leg| i64::from(leg.get()), segment_filter),
        with_same_departure_arrival_airport: state.with_same_departure_arrival_airport,
        equipments: state.equipments.clone(),
        payment_methods: state.payment_methods.clone(),
        pin_flight_signatures: state.pin_flight_signatures.clone(),
        price: conv_vec(&state.price, |price| proto::FloatRange {
            min: price.min,
            max: price.max,
        }),
        transfers_count: conv_vec(&state.transfers_count, |count| i64::from(*count)),
        transfers_duration: conv_vec(&state.transfers_duration, range),
        transfers_without_airport_change: state.transfers_without_airport_change,
        transfers_without_baggage_recheck: state.transfers_without_baggage_recheck,
        transfers_without_visa: state.transfers_without_visa,
        transfers_without_virtual_interline: state.transfers_without_virtual_interline,
        convenient_transfers: state.convenient_transfers,
        without_night_transfers: state.without_night_transfers,
        without_short_layover: state.without_short_layover,
        without_long_layover: state.without_long_layover,
        transfers_airports: state.transfers_airports.clone(),
        transfers_countries: state.transfers_countries.clone(),
        without_covid_restrictions: state.without_covid_restrictions,
        baggage: state.baggage.clone(),
        time_buckets: state.time_buckets.as_ref().map(|buckets| proto::TimeBuckets {
            arrival_time_bucket_width: i64::from(buckets.arrival_time_bucket_width),
            departure_time_bucket_width: i64::from(buckets.departure_time_bucket_width),
            trip_duration_time_bucket_width: i64::from(buckets.trip_duration_time_bucket_width),
        }),
        return_before_flight: state.return_before_flight,
        change_before_flight: state.change_before_flight,
    }
}

fn segment_filter(filter: &model::SegmentFilter) -> proto::SegmentFilter {
    proto::SegmentFilter {
        airports_arrival: filter.airports_arrival.clone(),
        airports_departure: filter.airports_departure.clone(),
        arrival_time: conv_vec(&filter.arrival_time, |window| proto::DateTimeOrTimeRange {
            min: window.min.clone(),
            max: window.max.clone(),
        }),
        arrival_date: conv_vec(&filter.arrival_date, |date| date.to_string()),
        departure_time: conv_vec(&filter.departure_time, date_time_range),
        trip_duration: conv_vec(&filter.trip_duration, range),
    }
}

fn date_time_range(window: &model::DateTimeRange) -> proto::DateTimeRange {
    proto::DateTimeRange {
        min: window.min.map_or(0, |at| at.unix_seconds()),
        max: window.max.map_or(0, |at| at.unix_seconds()),
    }
}

#[cfg(test)]
mod tests {
    use skybench_model::filter as model;

    use super::{date_time_range, degraded_boundaries};

    #[test]
    fn unset_range_bounds_encode_as_zero() {
        let window = model::DateTimeRange {
            min: Some("2022-12-23T04:51:24Z".parse().expect("timestamp")),
            max: None,
        };
        let converted = date_time_range(&window);
        assert_eq!(converted.min, 1_671_771_084);
        assert_eq!(converted.max, 0);
    }

    #[test]
    fn absent_degraded_sections_stay_unset() {
        let converted = degraded_boundaries(&model::DegradedBoundaries::default());
        assert!(converted.baggage.is_none());
        assert!(converted.price.is_none());
        assert!(converted.return_ticket.is_none());
        assert!(converted.has_interlines.is_none());
        assert!(converted.agents.is_empty());
    }
}
