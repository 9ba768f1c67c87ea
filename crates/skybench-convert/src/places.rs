use skybench_model as model;
use skybench_proto as proto;

use crate::scalars::{localizable, pointer_bool};
use crate::{conv_map, conv_vec};

pub(crate) fn places(places: &model::Places) -> proto::Places {
    proto::Places {
        airports: conv_map(&places.airports, |code| code.to_string(), airport_info),
        cities: conv_map(&places.cities, |code| code.to_string(), city_info),
        countries: conv_map(&places.countries, |code| code.to_string(), |country| {
            proto::CountryInfo {
                code: country.code.to_string(),
                name: localizable(&country.name),
                unified_visa: country.unified_visa.clone(),
            }
        }),
        metro_areas: conv_map(&places.metro_areas, |code| code.to_string(), |metro| {
            proto::MetroAreaInfo {
                code: metro.code.to_string(),
                airports: conv_vec(&metro.airports, |code| code.to_string()),
                timezone: metro.timezone.clone(),
            }
        }),
        airports_to_metro: conv_map(
            &places.airports_to_metro,
            |airport| airport.to_string(),
            |metro| metro.to_string(),
        ),
    }
}

fn airport_info(airport: &model::AirportInfo) -> proto::AirportInfo {
    proto::AirportInfo {
        name: localizable(&airport.name),
        code: airport.code.to_string(),
        city_code: airport.city_code.to_string(),
        metro_area_code: airport.metro_area_code.to_string(),
        coordinates: Some(proto::GeoPoint {
            lat: airport.coordinates.lat,
            lng: airport.coordinates.lng,
        }),
        has_transit_zone: Some(pointer_bool(airport.has_transit_zone)),
        transit_work_hours_min: i64::from(airport.transit_work_hours_min),
        transit_work_hours_max: i64::from(airport.transit_work_hours_max),
    }
}

fn city_info(city: &model::CityInfo) -> proto::CityInfo {
    proto::CityInfo {
        code: city.code.to_string(),
        name: localizable(&city.name),
        country: city.country.to_string(),
        timezone: city.timezone.clone(),
        airports: conv_vec(&city.airports, |code| code.to_string()),
    }
}

pub(crate) fn airline_info(airline: &model::AirlineInfo) -> proto::AirlineInfo {
    proto::AirlineInfo {
        iata: airline.iata.to_string(),
        is_lowcost: airline.is_lowcost,
        name: localizable(&airline.name),
        alliance_id: i64::from(airline.alliance_id.get()),
        site_name: airline.site_name.clone(),
        brand_color: airline.brand_color.clone(),
    }
}

pub(crate) fn agent_info(agent: &model::AgentInfo) -> proto::AgentInfo {
    proto::AgentInfo {
        id: i64::from(agent.id.get()),
        gate_name: agent.gate_name.clone(),
        label: localizable(&agent.label),
        payment_methods: agent.payment_methods.clone(),
        mobile_version: agent.mobile_version,
        hide_proposals: agent.hide_proposals,
        assisted: agent.assisted,
        mobile_type: agent.mobile_type.clone(),
        airline_iatas: agent.airline_iatas.clone(),
    }
}

pub(crate) fn alliance(alliance: &model::Alliance) -> proto::Alliance {
    proto::Alliance {
        id: i64::from(alliance.id.get()),
        name: alliance.name.clone(),
    }
}
