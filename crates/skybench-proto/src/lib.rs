//! Protocol Buffers message tree for flight search results, plus the two
//! binary codecs the benchmarks compare: plain `prost` encoding and a pooled
//! variant that reuses its buffers across calls.

mod enums;
pub mod filter;
mod flight;
mod places;
mod pooled;
mod proposal;
mod results;
pub mod samples;
mod ticket;

use prost::Message;
use thiserror::Error;

pub use enums::{Brand, Currency, EquipmentType, Order, SourceKind, TermSource, TripClass};
pub use flight::{Equipment, FlightDesignator, FlightLeg, TechnicalStop};
pub use places::{
    AgentInfo, AirlineInfo, AirportInfo, Alliance, CityInfo, CountryInfo, GeoPoint,
    MapStringString, MetroAreaInfo, OptBool, Places,
};
pub use pooled::PooledCodec;
pub use proposal::{
    AcceptedCard, AdditionalTariffInfo, Amount, Baggage, BaggageMergeInfo, BaggageMergeParams,
    Cashback, Fare, FlightTerm, Hotel, MergedTermsInfo, Proposal, ProposalOptions, Proposals,
    TariffInfo, TariffMergeInfo, TariffMergeParams, TransferTerm, TransferTerms,
};
pub use results::{
    AgentDebugInfo, CashbackDebugInfo, Chunk, DebugInfo, DirectFlights, FlightTermDebugInfo,
    GateDebugInfo, Passengers, ProposalDebugInfo, ResultsMeta, Schedule, ScheduleList,
    SearchParams, SearchResults, SoftResponse,
};
pub use ticket::{
    BadgeInfo, BadgeInfoMeta, Colors, FareProposal, FareProposals, Segment, Ticket, Transfer,
    VisaRules,
};

/// Encodes a message into a freshly allocated, exactly sized buffer.
pub fn encode_message<M: Message>(message: &M) -> Result<Vec<u8>, ProtoError> {
    let mut encoded = Vec::with_capacity(message.encoded_len());
    message.encode(&mut encoded)?;
    Ok(encoded)
}

/// Decodes a complete message from `bytes`.
pub fn decode_message<M: Message + Default>(bytes: &[u8]) -> Result<M, ProtoError> {
    Ok(M::decode(bytes)?)
}

#[derive(Debug, Error)]
pub enum ProtoError {
    #[error(transparent)]
    Decode(#[from] prost::DecodeError),
    #[error(transparent)]
    Encode(#[from] prost::EncodeError),
}
