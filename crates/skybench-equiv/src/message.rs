//! Shapes of the protobuf message tree.

use skybench_proto as proto;

use crate::shape::{Field, Inspect, Record, Shape};

impl Inspect for prost_types::Timestamp {
    fn shape(&self) -> Shape<'_> {
        Shape::Record(Record::new(
            "Timestamp",
            vec![
                Field {
                    name: "seconds",
                    value: Shape::Int(self.seconds),
                },
                Field {
                    name: "nanos",
                    value: Shape::Int(self.nanos.into()),
                },
            ],
        ))
    }
}

inspect_record! {
    proto::SearchResults as "SearchResults" { chunks }
    proto::ScheduleList as "ScheduleList" { list }
    proto::Proposals as "Proposals" { proposals }
    proto::FareProposals as "FareProposals" { proposals }
    proto::TransferTerms as "TransferTerms" { terms }
    proto::MapStringString as "MapStringString" { map }
    proto::OptBool as "OptBool" { value, is_unknown }
}

inspect_record! {
    proto::Chunk as "Chunk" {
        chunk_id,
        last_update_timestamp,
        debug_info,
        tickets,
        soft_tickets,
        brand_ticket,
        brand_tickets,
        cheapest_ticket,
        filtered_cheapest_ticket,
        cheapest_ticket_without_airport_precheck,
        direct_flights,
        flight_legs,
        airlines,
        places,
        agents,
        alliances,
        equipments,
        search_params,
        degraded_filter_boundaries,
        filter_boundaries,
        meta,
        filter_state,
        order,
        brand,
    }
    proto::SearchParams as "SearchParams" { passengers, trip_class, source_kind, experiments, payment_options }
    proto::Passengers as "Passengers" { adults, children, infants }
    proto::ResultsMeta as "ResultsMeta" { filtered_tickets_count, total_tickets_count, direct_tickets_count }
    proto::DebugInfo as "DebugInfo" { server_name, data_center, gates, from_cache, search_start_time }
    proto::GateDebugInfo as "GateDebugInfo" {
        name,
        agents,
        response_duration_seconds,
        errors,
        from_cache,
        cache_search_uuid,
        cache_search_created_at,
    }
    proto::AgentDebugInfo as "AgentDebugInfo" {
        proposals,
        proposals_count,
        bad_proposals,
        filtered_proposals,
        merged_flight_terms_sources,
    }
    proto::ProposalDebugInfo as "ProposalDebugInfo" { agency_price, multiplier, productivity, flight_terms, cashback }
    proto::FlightTermDebugInfo as "FlightTermDebugInfo" { baggage_source, handbags_source, gate_technical_stops }
    proto::CashbackDebugInfo as "CashbackDebugInfo" { amount, localized_amount, available }
    proto::SoftResponse as "SoftResponse" { filters_applied, tickets }
    proto::DirectFlights as "DirectFlights" { carrier, carriers, cheapest_ticket, schedule }
    proto::Schedule as "Schedule" { time, datetime, tickets_signatures }
}

inspect_record! {
    proto::Ticket as "Ticket" {
        segments,
        proposals,
        signature,
        popularity,
        score,
        hashsum,
        tags,
        badges,
        extra_fares,
        filtered_by,
    }
    proto::Segment as "Segment" { flights, transfers, tags }
    proto::Transfer as "Transfer" { visa_rules, recheck_baggage, night_transfer, tags }
    proto::VisaRules as "VisaRules" { required }
    proto::BadgeInfo as "BadgeInfo" { r#type as "type", scores, meta }
    proto::BadgeInfoMeta as "BadgeInfoMeta" { name, priority, position, limit, colors }
    proto::Colors as "Colors" { light, dark }
    proto::FareProposal as "FareProposal" { proposal_id, index }
}

inspect_record! {
    proto::Proposal as "Proposal" {
        id,
        price,
        price_per_person,
        agent_id,
        flight_terms,
        transfer_terms,
        unified_price,
        options,
        weight,
        from_main_airline,
        tags,
        minimum_fare,
        is_warmcache,
        cashback,
        cashback_per_person,
        accepted_cards,
    }
    proto::Amount as "Amount" { currency_code, value }
    proto::FlightTerm as "FlightTerm" {
        fare_code,
        trip_class,
        seats_available,
        marketing_carrier_designator,
        baggage,
        handbags,
        additional_tariff_info,
        is_charter,
        tags,
        merged_terms_info,
        merged_from_other_proposals,
    }
    proto::Baggage as "Baggage" { count, weight, total_weight, length, width, height, sum_dimension }
    proto::TariffInfo as "TariffInfo" { available, penalty, is_from_config }
    proto::AdditionalTariffInfo as "AdditionalTariffInfo" {
        seat_at_purchase_info,
        seat_at_registration_info,
        return_before_flight,
        return_after_flight,
        change_before_flight,
        change_after_flight,
        fare_name,
        miles,
    }
    proto::MergedTermsInfo as "MergedTermsInfo" {
        seat_at_registration,
        seat_at_purchase,
        return_before_flight,
        return_after_flight,
        change_before_flight,
        change_after_flight,
        baggage,
        handbags,
    }
    proto::TariffMergeInfo as "TariffMergeInfo" { is_from_config, mismatch }
    proto::TariffMergeParams as "TariffMergeParams" { available, penalty_currency_code, penalty_value }
    proto::BaggageMergeInfo as "BaggageMergeInfo" { is_from_config, mismatch }
    proto::BaggageMergeParams as "BaggageMergeParams" {
        count,
        weight,
        total_weight,
        height,
        length,
        width,
        sum_dimension,
    }
    proto::TransferTerm as "TransferTerm" { is_virtual_interline, tags }
    proto::ProposalOptions as "ProposalOptions" { hotel }
    proto::Hotel as "Hotel" { name, stars, room_type, meals }
    proto::Fare as "Fare" {
        code,
        baggage,
        handbags,
        return_before_flight,
        return_after_flight,
        change_before_flight,
        change_after_flight,
        seat_at_purchase,
        seat_at_registration,
        fare_name,
        miles,
    }
    proto::Cashback as "Cashback" { localized_amount, available }
    proto::AcceptedCard as "AcceptedCard" { region, system }
}

inspect_record! {
    proto::FlightLeg as "FlightLeg" {
        origin,
        destination,
        local_departure_date_time,
        local_arrival_date_time,
        departure_unix_timestamp,
        arrival_unix_timestamp,
        operating_carrier_designator,
        equipment,
        technical_stops,
        signature,
        tags,
    }
    proto::FlightDesignator as "FlightDesignator" { carrier, airline_id, number }
    proto::TechnicalStop as "TechnicalStop" { airport_code }
    proto::Equipment as "Equipment" { code, r#type as "type", name }
}

inspect_record! {
    proto::Places as "Places" { airports, cities, countries, metro_areas, airports_to_metro }
    proto::AirportInfo as "AirportInfo" {
        name,
        code,
        city_code,
        metro_area_code,
        coordinates,
        has_transit_zone,
        transit_work_hours_min,
        transit_work_hours_max,
    }
    proto::CityInfo as "CityInfo" { code, name, country, timezone, airports }
    proto::CountryInfo as "CountryInfo" { code, name, unified_visa }
    proto::MetroAreaInfo as "MetroAreaInfo" { code, airports, timezone }
    proto::GeoPoint as "GeoPoint" { lat, lng }
    proto::AirlineInfo as "AirlineInfo" { iata, is_lowcost, name, alliance_id, site_name, brand_color }
    proto::AgentInfo as "AgentInfo" {
        id,
        gate_name,
        label,
        payment_methods,
        mobile_version,
        hide_proposals,
        assisted,
        mobile_type,
        airline_iatas,
    }
    proto::Alliance as "Alliance" { id, name }
}

inspect_record! {
    proto::filter::FilterPrice as "FilterPrice" { enable_min_price, disable_min_price }
    proto::filter::FilterBool as "FilterBool" { enable_min_price, disable_min_price }
    proto::filter::PriceBoundaries as "PriceBoundaries" { min, max }
    proto::filter::FloatRange as "FloatRange" { min, max }
    proto::filter::Range as "Range" { min, max }
    proto::filter::TransferDurationBoundaries as "TransferDurationBoundaries" { min, max }
    proto::filter::RangeBoundaries as "RangeBoundaries" { min, max, buckets, bucket_width }
    proto::filter::DateTimeRangeBoundaries as "DateTimeRangeBoundaries" { min, max, buckets, bucket_width }
    proto::filter::DegradedBoundaries as "DegradedBoundaries" {
        agents,
        airlines,
        alliances,
        has_interlines,
        has_lowcosts,
        airports,
        same_departure_arrival_airport,
        baggage,
        equipments,
        payment_methods,
        price,
        departure_arrival_time,
        return_ticket,
        change_ticket,
        transfers_count,
        transfers_duration,
        transfers_airports,
        transfers_countries,
        has_transfers_with_airport_change,
        has_transfers_with_baggage_recheck,
        has_transfers_with_visa,
        has_transfers_with_virtual_interline,
        has_covid_restrictions,
        has_night_transfers,
        has_convenient_transfers,
        has_short_layover_transfers,
        has_long_layover_transfers,
    }
    proto::filter::DegradedAirportsBoundaries as "DegradedAirportsBoundaries" { arrival, departure }
    proto::filter::FilterBaggageBoundaries as "FilterBaggageBoundaries" { full_baggage, no_baggage, large_handbag }
    proto::filter::DegradedTimeBoundaries as "DegradedTimeBoundaries" {
        arrival_date,
        arrival_time,
        departure_time,
        trip_duration,
    }
    proto::filter::DegradedReturnTicketBoundaries as "DegradedReturnTicketBoundaries" { available, free }
    proto::filter::Boundaries as "Boundaries" {
        agents,
        airlines,
        alliances,
        has_interlines,
        has_lowcosts,
        airports,
        same_departure_arrival_airport,
        baggage,
        equipments,
        payment_methods,
        price,
        departure_arrival_time,
        return_ticket,
        change_ticket,
        transfers_count,
        transfers_duration,
        transfers_airports,
        transfers_countries,
        has_transfers_with_airport_change,
        has_transfers_with_baggage_recheck,
        has_transfers_with_visa,
        has_transfers_with_virtual_interline,
        has_covid_restrictions,
        has_night_transfers,
        has_convenient_transfers,
        has_short_layover_transfers,
        has_long_layover_transfers,
    }
    proto::filter::AirportsBoundaries as "AirportsBoundaries" { arrival, departure }
    proto::filter::BaggageBoundaries as "BaggageBoundaries" { full_baggage, no_baggage, large_handbag }
    proto::filter::TimeBoundaries as "TimeBoundaries" { arrival_date, arrival_time, departure_time, trip_duration }
    proto::filter::ReturnBoundaries as "ReturnBoundaries" { available, free }
    proto::filter::ChangeBoundaries as "ChangeBoundaries" { available, free }
    proto::filter::FilterState as "FilterState" {
        agents,
        airlines,
        alliances,
        without_interlines,
        without_lowcosts,
        segments,
        with_same_departure_arrival_airport,
        equipments,
        payment_methods,
        pin_flight_signatures,
        price,
        transfers_count,
        transfers_duration,
        transfers_without_airport_change,
        transfers_without_baggage_recheck,
        transfers_without_visa,
        transfers_without_virtual_interline,
        convenient_transfers,
        without_night_transfers,
        without_short_layover,
        without_long_layover,
        transfers_airports,
        transfers_countries,
        without_covid_restrictions,
        baggage,
        time_buckets,
        return_before_flight,
        change_before_flight,
    }
    proto::filter::SegmentFilter as "SegmentFilter" {
        airports_arrival,
        airports_departure,
        arrival_time,
        arrival_date,
        departure_time,
        trip_duration,
    }
    proto::filter::DateTimeOrTimeRange as "DateTimeOrTimeRange" { min, max }
    proto::filter::DateTimeRange as "DateTimeRange" { min, max }
    proto::filter::TimeBuckets as "TimeBuckets" {
        arrival_time_bucket_width,
        departure_time_bucket_width,
        trip_duration_time_bucket_width,
    }
}

inspect_record! {
    proto::samples::LongString as "LongString" { payload }
    proto::samples::Object as "Object" { id, price, datetime, data }
    proto::samples::LargeResponse as "LargeResponse" { data }
    proto::samples::SimpleObject as "SimpleObject" { id, price, count, ratio, label, nested, children }
    proto::samples::NestedObject as "NestedObject" { index, amount, tag }
}
