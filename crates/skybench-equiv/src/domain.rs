//! Shapes of the JSON domain model.

use skybench_model::filter::{
    AirportsBoundaries, BaggageBoundaries, Boundaries, DateTimeOrTimeRange, DateTimeRange,
    DateTimeRangeBoundaries, DegradedAirportsBoundaries, DegradedBaggageBoundaries,
    DegradedBoundaries, DegradedTicketBoundaries, DegradedTimeBoundaries, FilterBool, FilterPrice,
    FilterState, PriceRange, Range, RangeBoundaries, SegmentFilter, TicketBoundaries,
    TimeBoundaries, TimeBuckets, TransferDurationBoundaries,
};
use skybench_model::samples::{JsonLargeResponse, JsonLongString, JsonObject};
use skybench_model::{
    AcceptedCard, AdditionalTariffInfo, AgentDebugInfo, AgentId, AgentInfo, AirlineId, AirlineInfo,
    AirportInfo, Alliance, AllianceId, Amount, BadgeInfo, BadgeInfoMeta, Baggage, BaggageMergeInfo,
    BaggageMergeParams, Brand, BrandId, Cashback, CashbackDebugInfo, Chunk, CityInfo, Colors,
    CountryCode, CountryInfo, CurrencyCode, Date, DateTime, DebugInfo, DirectFlights, Equipment,
    EquipmentType, Fare, FareProposal, FlightDesignator, FlightLeg, FlightTerm,
    FlightTermDebugInfo, GateDebugInfo, GeoPoint, Hotel, LanguageCode, LegIndex, LocationCode,
    MergedTermsInfo, MetroAreaInfo, Order, Passengers, Places, PointerBool, Proposal,
    ProposalDebugInfo, ProposalOptions, ResultsMeta, Schedule, SearchParams, Segment, SoftResponse,
    SourceKind, TariffInfo, TariffMergeInfo, TariffMergeParams, TechnicalStop, TermSource, Ticket,
    Timestamp, Transfer, TransferTerm, TransfersCount, TripClass, VisaRules,
};

use crate::shape::{Field, Inspect, InspectKey, MapKey, Record, Shape};

macro_rules! inspect_text_code {
    ($($ty:ty),*) => {
        $(
            impl Inspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Str(self.as_str())
                }
            }

            impl InspectKey for $ty {
                fn map_key(&self) -> MapKey {
                    MapKey::Text(self.as_str().to_owned())
                }
            }
        )*
    };
}

inspect_text_code!(AirlineId, LocationCode, CountryCode, LanguageCode);

macro_rules! inspect_numeric_id {
    ($($ty:ty => $variant:ident),*) => {
        $(
            impl Inspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::$variant(self.get().into())
                }
            }

            impl InspectKey for $ty {
                fn map_key(&self) -> MapKey {
                    MapKey::Int(self.get().into())
                }
            }
        )*
    };
}

inspect_numeric_id!(
    AgentId => Uint,
    AllianceId => Uint,
    BrandId => Uint,
    LegIndex => Uint,
    TransfersCount => Int
);

macro_rules! inspect_enum {
    ($($ty:ty),*) => {
        $(
            impl Inspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Int(self.code().into())
                }
            }
        )*
    };
}

inspect_enum!(TripClass, SourceKind, Order, Brand, TermSource, EquipmentType);

impl Inspect for CurrencyCode {
    fn shape(&self) -> Shape<'_> {
        Shape::Record(Record::new(
            "Code",
            vec![Field {
                name: "code",
                value: Shape::Str(self.as_str()),
            }],
        ))
    }
}

impl Inspect for PointerBool {
    fn shape(&self) -> Shape<'_> {
        let value = self.get().map_or(Shape::Absent, Shape::Bool);
        Shape::Record(Record::new("PointerBool", vec![Field { name: "value", value }]))
    }
}

impl Inspect for Timestamp {
    fn shape(&self) -> Shape<'_> {
        Shape::Record(Record::new(
            "Time",
            vec![Field {
                name: "unix_millis",
                value: Shape::Int(self.unix_millis()),
            }],
        ))
    }
}

impl Inspect for DateTime {
    fn shape(&self) -> Shape<'_> {
        Shape::Record(Record::new(
            "DateTime",
            vec![Field {
                name: "seconds",
                value: Shape::Int(self.naive().and_utc().timestamp()),
            }],
        ))
    }
}

impl InspectKey for DateTime {
    fn map_key(&self) -> MapKey {
        MapKey::Text(self.to_string())
    }
}

impl Inspect for Date {
    fn shape(&self) -> Shape<'_> {
        Shape::Record(Record::new(
            "Date",
            vec![Field {
                name: "days",
                value: Shape::Int(chrono::Datelike::num_days_from_ce(&self.naive()).into()),
            }],
        ))
    }
}

impl InspectKey for Date {
    fn map_key(&self) -> MapKey {
        MapKey::Text(self.to_string())
    }
}

inspect_record! {
    Chunk as "Chunk" {
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
    SearchParams as "SearchParams" { passengers, trip_class, source_kind, experiments, payment_options }
    Passengers as "Passengers" { adults, children, infants }
    ResultsMeta as "ResultsMeta" { filtered_tickets_count, total_tickets_count, direct_tickets_count }
    DebugInfo as "DebugInfo" { server_name, data_center, gates, from_cache, search_start_time }
    GateDebugInfo as "GateDebugInfo" {
        name,
        agents,
        response_duration_seconds,
        errors,
        from_cache,
        cache_search_uuid,
        cache_search_created_at,
    }
    AgentDebugInfo as "AgentDebugInfo" {
        proposals,
        proposals_count,
        bad_proposals,
        filtered_proposals,
        merged_flight_terms_sources,
    }
    ProposalDebugInfo as "ProposalDebugInfo" { agency_price, multiplier, productivity, flight_terms, cashback }
    FlightTermDebugInfo as "FlightTermDebugInfo" { baggage_source, handbags_source, gate_technical_stops }
    CashbackDebugInfo as "CashbackDebugInfo" { amount, localized_amount, available }
    SoftResponse as "SoftResponse" { filters_applied, tickets }
    DirectFlights as "DirectFlights" { carrier, carriers, cheapest_ticket, schedule }
    Schedule as "Schedule" { time, datetime, tickets_signatures }
}

inspect_record! {
    Ticket as "Ticket" {
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
    Segment as "Segment" { flights, transfers, tags }
    Transfer as "Transfer" { visa_rules, recheck_baggage, night_transfer, tags }
    VisaRules as "VisaRules" { required }
    BadgeInfo as "BadgeInfo" { kind as "type", scores, meta }
    BadgeInfoMeta as "BadgeInfoMeta" { name, priority, position, limit, colors }
    Colors as "Colors" { light, dark }
    FareProposal as "FareProposal" { proposal_id, index }
}

inspect_record! {
    Proposal as "Proposal" {
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
    Amount as "Amount" { currency_code, value }
    FlightTerm as "FlightTerm" {
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
    Baggage as "Baggage" { count, weight, total_weight, length, width, height, sum_dimension }
    TariffInfo as "TariffInfo" { available, penalty, is_from_config }
    AdditionalTariffInfo as "AdditionalTariffInfo" {
        seat_at_purchase_info,
        seat_at_registration_info,
        return_before_flight,
        return_after_flight,
        change_before_flight,
        change_after_flight,
        fare_name,
        miles,
    }
    MergedTermsInfo as "MergedTermsInfo" {
        seat_at_registration,
        seat_at_purchase,
        return_before_flight,
        return_after_flight,
        change_before_flight,
        change_after_flight,
        baggage,
        handbags,
    }
    TariffMergeInfo as "TariffMergeInfo" { is_from_config, mismatch }
    TariffMergeParams as "TariffMergeParams" { available, penalty_currency_code, penalty_value }
    BaggageMergeInfo as "BaggageMergeInfo" { is_from_config, mismatch }
    BaggageMergeParams as "BaggageMergeParams" {
        count,
        weight,
        total_weight,
        height,
        length,
        width,
        sum_dimension,
    }
    TransferTerm as "TransferTerm" { is_virtual_interline, tags }
    ProposalOptions as "ProposalOptions" { hotel }
    Hotel as "Hotel" { name, stars, room_type, meals }
    Fare as "Fare" {
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
    Cashback as "Cashback" { localized_amount, available }
    AcceptedCard as "AcceptedCard" { region, system }
}

inspect_record! {
    FlightLeg as "FlightLeg" {
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
    FlightDesignator as "FlightDesignator" { carrier, airline_id, number }
    TechnicalStop as "TechnicalStop" { airport_code }
    Equipment as "Equipment" { code, kind as "type", name }
}

inspect_record! {
    Places as "Places" { airports, cities, countries, metro_areas, airports_to_metro }
    AirportInfo as "AirportInfo" {
        name,
        code,
        city_code,
        metro_area_code,
        coordinates,
        has_transit_zone,
        transit_work_hours_min,
        transit_work_hours_max,
    }
    CityInfo as "CityInfo" { code, name, country, timezone, airports }
    CountryInfo as "CountryInfo" { code, name, unified_visa }
    MetroAreaInfo as "MetroAreaInfo" { code, airports, timezone }
    GeoPoint as "GeoPoint" { lat, lng }
    AirlineInfo as "AirlineInfo" { iata, is_lowcost, name, alliance_id, site_name, brand_color }
    AgentInfo as "AgentInfo" {
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
    Alliance as "Alliance" { id, name }
}

inspect_record! {
    FilterPrice as "FilterPrice" { enable_min_price, disable_min_price }
    FilterBool as "FilterBool" { enable_min_price, disable_min_price }
    PriceRange as "PriceRange" { min, max }
    Range as "Range" { min, max }
    TransferDurationBoundaries as "TransferDurationBoundaries" { min, max }
    RangeBoundaries as "RangeBoundaries" { min, max, buckets, bucket_width }
    DateTimeRangeBoundaries as "DateTimeRangeBoundaries" { min, max, buckets, bucket_width }
    DegradedBoundaries as "DegradedBoundaries" {
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
    DegradedAirportsBoundaries as "DegradedAirportsBoundaries" { arrival, departure }
    DegradedBaggageBoundaries as "DegradedBaggageBoundaries" { full_baggage, no_baggage, large_handbag }
    DegradedTimeBoundaries as "DegradedTimeBoundaries" {
        arrival_date,
        arrival_time,
        departure_time,
        trip_duration,
    }
    DegradedTicketBoundaries as "DegradedTicketBoundaries" { available, free }
    Boundaries as "Boundaries" {
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
    AirportsBoundaries as "AirportsBoundaries" { arrival, departure }
    BaggageBoundaries as "BaggageBoundaries" { full_baggage, no_baggage, large_handbag }
    TimeBoundaries as "TimeBoundaries" { arrival_date, arrival_time, departure_time, trip_duration }
    TicketBoundaries as "TicketBoundaries" { available, free }
    FilterState as "FilterState" {
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
    SegmentFilter as "SegmentFilter" {
        airports_arrival,
        airports_departure,
        arrival_time,
        arrival_date,
        departure_time,
        trip_duration,
    }
    DateTimeOrTimeRange as "DateTimeOrTimeRange" { min, max }
    DateTimeRange as "DateTimeRange" { min, max }
    TimeBuckets as "TimeBuckets" {
        arrival_time_bucket_width,
        departure_time_bucket_width,
        trip_duration_time_bucket_width,
    }
}

inspect_record! {
    JsonLongString as "LongString" { payload }
    JsonObject as "Object" { id, price, datetime, data }
    JsonLargeResponse as "LargeResponse" { data }
}
