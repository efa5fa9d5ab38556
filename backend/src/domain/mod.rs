//! Domain primitives, services, and ports.
//!
//! Types here are transport agnostic. Inbound adapters translate HTTP into
//! calls on the driving ports in [`ports`]; outbound adapters implement the
//! driven [`ports::DisclosureRepository`].
//!
//! Public surface:
//! - `Error` / `ErrorCode`: error payload rendered at every boundary.
//! - `Disclosure`, `DisclosureDraft`, `GriCode`, `DisclosureId`: the record
//!   model.
//! - `MemberId`: caller identity.
//! - `GriProgress`: completion report.
//! - `DisclosureService`, `ProgressService`: port implementations.

pub mod disclosure;
pub mod disclosure_service;
pub mod error;
pub mod member;
pub mod ports;
pub mod progress;
pub mod progress_service;
pub mod request_context;
pub mod trace_id;

pub use self::disclosure::{
    Disclosure, DisclosureDraft, DisclosureId, DisclosureValidationError, GRI_CODE_MAX, GriCode,
    LABEL_MAX,
};
pub use self::disclosure_service::DisclosureService;
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::member::{MemberId, MemberIdValidationError};
pub use self::progress::{GriProgress, TOTAL_GRI_COUNT};
pub use self::progress_service::ProgressService;
pub use self::request_context::RequestContext;
pub use self::trace_id::TraceId;
