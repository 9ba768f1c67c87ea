use skybench_model as model;
use skybench_proto as proto;

use crate::filter::{boundaries, degraded_boundaries, filter_state};
use crate::places::{agent_info, airline_info, alliance, places};
use crate::proposal::{proposals, technical_stop};
use crate::scalars::{amount, brand, order, source_kind, term_source, trip_class};
use crate::ticket::{equipment, flight_leg, ticket};
use crate::{conv_map, conv_vec};

pub(crate) fn chunk(chunk: &model::Chunk) -> proto::Chunk {
    proto::Chunk {
        chunk_id: chunk.chunk_id.clone(),
        last_update_timestamp: chunk.last_update_timestamp,
        debug_info: chunk.debug_info.as_ref().map(debug_info),
        tickets: conv_vec(&chunk.tickets, ticket),
        soft_tickets: chunk.soft_tickets.as_ref().map(soft_response),
        brand_ticket: chunk.brand_ticket.as_ref().map(ticket),
        brand_tickets: conv_map(&chunk.brand_tickets, |id| i64::from(id.get()), ticket),
        cheapest_ticket: chunk.cheapest_ticket.as_ref().map(ticket),
        filtered_cheapest_ticket: chunk.filtered_cheapest_ticket.as_ref().map(ticket),
        cheapest_ticket_without_airport_precheck: chunk
            .cheapest_ticket_without_airport_precheck
            .as_ref()
            .map(ticket),
        direct_flights: conv_vec(&chunk.direct_flights, direct_flights),
        flight_legs: conv_vec(&chunk.flight_legs, flight_leg),
        airlines: conv_map(&chunk.airlines, |iata| iata.to_string(), airline_info),
        places: Some(places(&chunk.places)),
        agents: conv_map(&chunk.agents, |id| i64::from(id.get()), agent_info),
        alliances: conv_map(&chunk.alliances, |id| i64::from(id.get()), alliance),
        equipments: conv_map(&chunk.equipments, |code| code.clone(), equipment),
        search_params: Some(search_params(&chunk.search_params)),
        degraded_filter_boundaries: chunk
            .degraded_filter_boundaries
            .as_ref()
            .map(degraded_boundaries),
        filter_boundaries: chunk.filter_boundaries.as_ref().map(boundaries),
        meta: Some(meta(&chunk.meta)),
        filter_state: chunk.filter_state.as_ref().map(filter_state),
        order: order(chunk.order),
        brand: brand(chunk.brand),
    }
}

fn search_params(params: &model::SearchParams) -> proto::SearchParams {
    proto::SearchParams {
        passengers: Some(proto::Passengers {
            adults: params.passengers.adults,
            children: params.passengers.children,
            infants: params.passengers.infants,
        }),
        trip_class: trip_class(params.trip_class),
        source_kind: source_kind(params.source_kind),
        experiments: params.experiments.clone(),
        payment_options: params.payment_options.clone(),
    }
}

fn meta(meta: &model::ResultsMeta) -> proto::ResultsMeta {
    proto::ResultsMeta {
        filtered_tickets_count: meta.filtered_tickets_count as i64,
        total_tickets_count: meta.total_tickets_count as i64,
        direct_tickets_count: meta.direct_tickets_count as i64,
    }
}

fn debug_info(info: &model::DebugInfo) -> proto::DebugInfo {
    proto::DebugInfo {
        server_name: info.server_name.clone(),
        data_center: info.data_center.clone(),
        gates: conv_map(&info.gates, |name| name.clone(), gate_debug_info),
        from_cache: info.from_cache,
        search_start_time: info.search_start_time.unix_millis(),
    }
}

fn gate_debug_info(info: &model::GateDebugInfo) -> proto::GateDebugInfo {
    proto::GateDebugInfo {
        name: info.name.clone(),
        agents: conv_map(&info.agents, |id| i64::from(id.get()), agent_debug_info),
        response_duration_seconds: info.response_duration_seconds,
        errors: info.errors.clone(),
        from_cache: info.from_cache,
        cache_search_uuid: info.cache_search_uuid.clone(),
        cache_search_created_at: info.cache_search_created_at,
    }
}

fn agent_debug_info(info: &model::AgentDebugInfo) -> proto::AgentDebugInfo {
    proto::AgentDebugInfo {
        proposals: conv_map(&info.proposals, |id| id.clone(), proposal_debug_info),
        proposals_count: i64::from(info.proposals_count),
        bad_proposals: conv_map(&info.bad_proposals, |reason| reason.clone(), |n| i64::from(*n)),
        filtered_proposals: conv_map(&info.filtered_proposals, |reason| reason.clone(), |list| {
            proposals(list)
        }),
        merged_flight_terms_sources: conv_map(
            &info.merged_flight_terms_sources,
            |source| source.clone(),
            |n| i64::from(*n),
        ),
    }
}

fn proposal_debug_info(info: &model::ProposalDebugInfo) -> proto::ProposalDebugInfo {
    proto::ProposalDebugInfo {
        agency_price: Some(amount(&info.agency_price)),
        multiplier: info.multiplier,
        productivity: info.productivity,
        flight_terms: conv_map(
            &info.flight_terms,
            |leg| i64::from(leg.get()),
            flight_term_debug_info,
        ),
        cashback: info.cashback.as_ref().map(cashback_debug_info),
    }
}

fn flight_term_debug_info(info: &model::FlightTermDebugInfo) -> proto::FlightTermDebugInfo {
    proto::FlightTermDebugInfo {
        baggage_source: term_source(info.baggage_source),
        handbags_source: term_source(info.handbags_source),
        gate_technical_stops: conv_vec(&info.gate_technical_stops, technical_stop),
    }
}

fn cashback_debug_info(info: &model::CashbackDebugInfo) -> proto::CashbackDebugInfo {
    proto::CashbackDebugInfo {
        amount: info.amount.as_ref().map(amount),
        localized_amount: info.localized_amount.as_ref().map(amount),
        available: info.available,
    }
}

fn soft_response(response: &model::SoftResponse) -> proto::SoftResponse {
    proto::SoftResponse {
        filters_applied: response.filters_applied.clone(),
        tickets: conv_vec(&response.tickets, ticket),
    }
}

fn direct_flights(flights: &model::DirectFlights) -> proto::DirectFlights {
    proto::DirectFlights {
        carrier: flights.carrier.clone(),
        carriers: flights.carriers.clone(),
        cheapest_ticket: Some(ticket(&flights.cheapest_ticket)),
        schedule: conv_vec(&flights.schedule, |list| proto::ScheduleList {
            list: conv_vec(list, schedule),
        }),
    }
}

fn schedule(schedule: &model::Schedule) -> proto::Schedule {
    proto::Schedule {
        time: schedule.time.clone(),
        datetime: schedule.datetime.map(|value| value.to_string()),
        tickets_signatures: schedule.tickets_signatures.clone(),
    }
}
