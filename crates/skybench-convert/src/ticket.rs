use skybench_model as model;
use skybench_proto as proto;

use crate::proposal::{flight_designator, proposal, technical_stop};
use crate::scalars::equipment_type;
use crate::{conv_map, conv_vec};

pub(crate) fn ticket(ticket: &model::Ticket) -> proto::Ticket {
    proto::Ticket {
        segments: conv_vec(&ticket.segments, segment),
        proposals: conv_vec(&ticket.proposals, proposal),
        signature: ticket.signature.clone(),
        popularity: ticket.popularity,
        score: ticket.score,
        hashsum: ticket.hashsum,
        tags: ticket.tags.clone(),
        badges: conv_vec(&ticket.badges, badge_info),
        extra_fares: conv_map(&ticket.extra_fares, |fare| fare.clone(), |list| {
            proto::FareProposals {
                proposals: conv_vec(list, fare_proposal),
            }
        }),
        filtered_by: ticket.filtered_by.clone(),
    }
}

fn segment(segment: &model::Segment) -> proto::Segment {
    proto::Segment {
        flights: conv_vec(&segment.flights, |leg| i64::from(leg.get())),
        transfers: conv_vec(&segment.transfers, transfer),
        tags: segment.tags.clone(),
    }
}

fn transfer(transfer: &model::Transfer) -> proto::Transfer {
    proto::Transfer {
        visa_rules: Some(proto::VisaRules {
            required: transfer.visa_rules.required,
        }),
        recheck_baggage: transfer.recheck_baggage,
        night_transfer: transfer.night_transfer,
        tags: transfer.tags.clone(),
    }
}

fn badge_info(badge: &model::BadgeInfo) -> proto::BadgeInfo {
    let meta = &badge.meta;
    proto::BadgeInfo {
        r#type: badge.kind.clone(),
        scores: badge.scores.clone(),
        meta: Some(proto::BadgeInfoMeta {
            name: conv_map(&meta.name, |language| language.to_string(), |text| text.clone()),
            priority: i64::from(meta.priority),
            position: i64::from(meta.position),
            limit: i64::from(meta.limit),
            colors: Some(proto::Colors {
                light: meta.colors.light.clone(),
                dark: meta.colors.dark.clone(),
            }),
        }),
    }
}

fn fare_proposal(fare: &model::FareProposal) -> proto::FareProposal {
    proto::FareProposal {
        proposal_id: fare.proposal_id.clone(),
        index: i64::from(fare.index),
    }
}

pub(crate) fn flight_leg(leg: &model::FlightLeg) -> proto::FlightLeg {
    proto::FlightLeg {
        origin: leg.origin.to_string(),
        destination: leg.destination.to_string(),
        local_departure_date_time: leg.local_departure_date_time.to_string(),
        local_arrival_date_time: leg.local_arrival_date_time.to_string(),
        departure_unix_timestamp: leg.departure_unix_timestamp,
        arrival_unix_timestamp: leg.arrival_unix_timestamp,
        operating_carrier_designator: Some(flight_designator(&leg.operating_carrier_designator)),
        equipment: Some(equipment(&leg.equipment)),
        technical_stops: conv_vec(&leg.technical_stops, technical_stop),
        signature: leg.signature.clone(),
        tags: leg.tags.clone(),
    }
}

pub(crate) fn equipment(equipment: &model::Equipment) -> proto::Equipment {
    proto::Equipment {
        code: equipment.code.clone(),
        r#type: equipment_type(equipment.kind),
        name: equipment.name.clone(),
    }
}
