//! pulse_charts
//!
//! Chart-geometry engine for the Pulse analytics dashboard.
//!
//! Design goals:
//! - Projections are pure functions over finished sample sequences; no state
//!   survives a call and no I/O happens inside one
//! - Geometry comes out as renderer-agnostic descriptors (points, rects,
//!   wedge paths) in a normalized 0..100 viewbox
//! - The live-data choreography stays behind [`feed`]; the projection
//!   modules never see where samples come from

pub mod bar;
pub mod dashboard;
pub mod donut;
pub mod feed;
pub mod format;
pub mod line;
pub mod scale;
pub mod svg;

pub use dashboard::{DashboardGeometry, DashboardModel, StatCard};
pub use donut::DonutSegment;
pub use feed::{DashboardFeed, Feed};
pub use line::{LineProjection, VIEW_SPAN};

/// Common imports for chart users.
pub mod prelude {
    pub use crate::bar::{project_bar_heights, BarChartModel, BarChartStyle};
    pub use crate::dashboard::{DashboardGeometry, DashboardModel, StatCard};
    pub use crate::donut::{
        project_donut_segments, DonutChartModel, DonutChartStyle, DonutSegment,
    };
    pub use crate::feed::{
        ChannelFeed, DashboardFeed, Feed, SourceSplitFeed, TrafficFeed,
    };
    pub use crate::line::{
        project_line_series, LineChartModel, LineChartStyle, LineProjection,
    };
    pub use crate::scale::{BandScale, LinearScale};
    pub use crate::VIEW_SPAN;
}
