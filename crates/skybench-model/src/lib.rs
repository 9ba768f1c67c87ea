//! JSON-tagged domain model for flight search results.
//!
//! This is the source-of-truth representation: it is what the search API
//! serialises as JSON, and what `skybench-convert` maps onto the protobuf
//! message tree.

mod codes;
mod enums;
mod error;
pub mod filter;
mod flight;
mod null;
mod places;
mod proposal;
mod results;
pub mod samples;
mod ticket;
mod time;
mod tristate;

pub use codes::{
    AgentId, AirlineId, AllianceId, Amount, BrandId, CountryCode, CurrencyCode, LanguageCode,
    LegIndex, LocationCode, TransfersCount,
};
pub use enums::{Brand, EquipmentType, Order, SourceKind, TermSource, TripClass};
pub use error::ModelError;
pub use flight::{Equipment, FlightDesignator, FlightLeg, TechnicalStop};
pub use places::{
    AgentInfo, AirlineInfo, AirportInfo, Alliance, CityInfo, CountryInfo, GeoPoint,
    LocalizableString, MetroAreaInfo, Places,
};
pub use proposal::{
    AcceptedCard, AdditionalTariffInfo, Baggage, BaggageMergeInfo, BaggageMergeParams, Cashback,
    Fare, FlightTerm, Hotel, MergedTermsInfo, Proposal, ProposalOptions, TariffInfo,
    TariffMergeInfo, TariffMergeParams, TransferTerm,
};
pub use results::{
    AgentDebugInfo, CashbackDebugInfo, Chunk, DebugInfo, DirectFlights, FlightTermDebugInfo,
    GateDebugInfo, Passengers, ProposalDebugInfo, ResultsMeta, Schedule, SearchParams,
    SearchResults, SoftResponse,
};
pub use ticket::{BadgeInfo, BadgeInfoMeta, Colors, FareProposal, Segment, Ticket, Transfer, VisaRules};
pub use time::{Date, DateTime, Timestamp};
pub use tristate::PointerBool;
