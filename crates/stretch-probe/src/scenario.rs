//! The measurements behind each report section.
//!
//! Every scenario builds fresh vectors from [`ProbeSettings`], drives them
//! through a [`Recorder`] or directly, and returns plain rows for
//! [`report`](crate::report) to print.

use stretch_mem::{Allocator, GrowVec, VecError};

use stretch_log::{info, warn};

use crate::{
    AnyError, Context, Result,
    recorder::{Recorder, Route},
    settings::{ProbeSettings, ShrinkChoice},
};

/// Bytes held by `vec`: its own header plus the reserved slots.
pub fn footprint<T, A: Allocator>(vec: &GrowVec<T, A>) -> usize {
    size_of::<GrowVec<T, A>>() + vec.capacity() * size_of::<T>()
}

#[inline(always)]
fn utilization(len: usize, capacity: usize) -> f64 {
    if capacity == 0 {
        0.0
    }
    else {
        len as f64 / capacity as f64 * 100.0
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Transition {
    pub count: usize,
    pub capacity: usize,
}

pub struct GrowthReport {
    pub count: usize,
    pub transitions: GrowVec<Transition>,
    pub reallocs: usize,
}

impl GrowthReport {

    pub fn capacities(&self) -> impl Iterator<Item = usize> {
        self.transitions.iter().map(|t| t.capacity)
    }
}

/// Pushes `1..=count` and keeps the points where the capacity moved.
pub fn growth(settings: &ProbeSettings) -> Result<GrowthReport> {
    info!("growth: pushing {} elements with {} growth", settings.count, settings.growth.name());
    let mut rec = Recorder::new(settings.vec::<usize>());
    for i in 0..settings.count {
        rec.push(i).ctx_err_with(|| format!("push #{} failed", i + 1))?;
    }
    let mut transitions = GrowVec::new();
    for sample in rec.transitions() {
        transitions
            .push(Transition { count: sample.len, capacity: sample.capacity })
            .map_err(VecError::from)
            .ctx_err("recording growth transition")?;
    }
    Ok(GrowthReport {
        count: settings.count,
        transitions,
        reallocs: rec.vec().realloc_count(),
    })
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CreationRow {
    pub route: Route,
    pub len: usize,
    pub capacity: usize,
    pub bytes: usize,
    pub after_len: usize,
    pub after_capacity: usize,
    pub after_bytes: usize,
}

impl CreationRow {

    #[inline(always)]
    pub fn utilization(&self) -> f64 {
        utilization(self.len, self.capacity)
    }

    #[inline(always)]
    pub fn after_utilization(&self) -> f64 {
        utilization(self.after_len, self.after_capacity)
    }

    #[inline(always)]
    pub fn reallocated(&self) -> bool {
        self.after_capacity != self.capacity
    }

    /// New capacity over old, when both are non-zero and they differ.
    pub fn growth_factor(&self) -> Option<f64> {
        if !self.reallocated() || self.capacity == 0 {
            return None
        }
        Some(self.after_capacity as f64 / self.capacity as f64)
    }
}

fn build(route: Route, count: usize, settings: &ProbeSettings) -> core::result::Result<GrowVec<u32>, VecError> {
    let mut vec = match route {
        Route::Literal => GrowVec::from_slice(vec![1; count].as_slice())?,
        Route::Repeat => GrowVec::from_elem(1, count)?,
        Route::Comprehension => {
            let mut vec = settings.vec();
            vec.try_extend((0..count).map(|_| 1))?;
            vec
        },
        Route::Range => {
            let mut vec = GrowVec::new();
            vec.reserve_exact(count)?;
            vec.try_extend((0..count).map(|i| i as u32))?;
            vec
        },
    };
    settings.growth.apply(&mut vec);
    settings.shrink.apply(&mut vec);
    Ok(vec)
}

/// Capacity after each construction route, then after one more push.
pub fn creation(settings: &ProbeSettings, count: usize) -> Result<GrowVec<CreationRow>> {
    info!("creation: {} elements per route", count);
    let mut rows = GrowVec::new();
    for route in Route::ALL {
        let vec = build(route, count, settings)
            .ctx_err_with(|| format!("building {} route", route.name()))?;
        let mut rec = Recorder::created(vec, route)
            .ctx_err("recording creation")?;
        let (len, capacity, bytes) = (rec.vec().len(), rec.vec().capacity(), footprint(rec.vec()));
        rec.push(1)
            .ctx_err_with(|| format!("pushing onto {} route", route.name()))?;
        let row = CreationRow {
            route,
            len,
            capacity,
            bytes,
            after_len: rec.vec().len(),
            after_capacity: rec.vec().capacity(),
            after_bytes: footprint(rec.vec()),
        };
        rows.push(row)
            .map_err(VecError::from)
            .ctx_err("recording creation row")?;
    }
    Ok(rows)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ShrinkRow {
    pub keep: usize,
    pub len: usize,
    pub capacity: usize,
    pub bytes: usize,
    /// Shrinks the allocator refused while truncating.
    pub skipped: usize,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ShrinkEvent {
    pub from_keep: usize,
    pub to_keep: usize,
    pub from_capacity: usize,
    pub to_capacity: usize,
}

pub struct ShrinkReport {
    pub policy: ShrinkChoice,
    pub initial_len: usize,
    pub initial_capacity: usize,
    pub initial_bytes: usize,
    pub rows: GrowVec<ShrinkRow>,
    pub events: GrowVec<ShrinkEvent>,
}

/// For every point, truncates a fresh copy of a `count` element vector down
/// to that point and records what the shrink policy left behind.
pub fn shrink(settings: &ProbeSettings) -> Result<ShrinkReport> {
    info!("shrink: {} points with {} policy", settings.points.len(), settings.shrink.name());
    if let Some(&bad) = settings.points.iter().find(|&&point| point > settings.count) {
        return Err(AnyError::just_context(format!(
            "truncation point {} exceeds element count {}", bad, settings.count,
        )))
    }
    let base = build(Route::Range, settings.count, settings)
        .ctx_err("building shrink baseline")?;
    let mut rows = GrowVec::new();
    for &keep in &settings.points {
        let mut rec = Recorder::new(base.copy().ctx_err("copying shrink baseline")?);
        rec.truncate(keep)
            .ctx_err_with(|| format!("truncating to {}", keep))?;
        let row = ShrinkRow {
            keep,
            len: rec.vec().len(),
            capacity: rec.vec().capacity(),
            bytes: footprint(rec.vec()),
            skipped: rec.vec().skipped_shrinks(),
        };
        if row.skipped != 0 {
            warn!("truncating to {}: shrink skipped, allocation failed", keep);
        }
        rows.push(row)
            .map_err(VecError::from)
            .ctx_err("recording shrink row")?;
    }
    let mut events = GrowVec::new();
    for pair in rows.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        if curr.capacity < prev.capacity {
            let event = ShrinkEvent {
                from_keep: prev.keep,
                to_keep: curr.keep,
                from_capacity: prev.capacity,
                to_capacity: curr.capacity,
            };
            events.push(event)
                .map_err(VecError::from)
                .ctx_err("recording shrink event")?;
        }
    }
    Ok(ShrinkReport {
        policy: settings.shrink,
        initial_len: base.len(),
        initial_capacity: base.capacity(),
        initial_bytes: footprint(&base),
        rows,
        events,
    })
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Method {
    Copy,
    Slice,
    Rebuild,
    ShrinkToFit,
}

impl Method {

    pub fn name(self) -> &'static str {
        match self {
            Self::Copy => "copy()",
            Self::Slice => "from_slice(&v[..])",
            Self::Rebuild => "rebuild from iterator",
            Self::ShrinkToFit => "shrink_to_fit()",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CompactionRow {
    pub method: Method,
    pub len: usize,
    pub capacity: usize,
    pub bytes: usize,
}

pub struct CompactionReport {
    pub keep: usize,
    pub truncated_capacity: usize,
    pub truncated_bytes: usize,
    pub rows: GrowVec<CompactionRow>,
}

fn compaction_row<T>(method: Method, vec: &GrowVec<T>) -> CompactionRow {
    CompactionRow {
        method,
        len: vec.len(),
        capacity: vec.capacity(),
        bytes: footprint(vec),
    }
}

/// Truncates a `count` element vector to `keep` and compares the ways of
/// getting rid of the leftover capacity.
pub fn compaction(settings: &ProbeSettings) -> Result<CompactionReport> {
    info!("compaction: {} -> {} elements", settings.count, settings.keep);
    if settings.keep > settings.count {
        return Err(AnyError::just_context(format!(
            "keep count {} exceeds element count {}", settings.keep, settings.count,
        )))
    }
    let mut truncated = build(Route::Range, settings.count, settings)
        .ctx_err("building compaction baseline")?;
    truncated.clear_shrink_policy();
    truncated.truncate(settings.keep)
        .ctx_err("truncating compaction baseline")?;
    let truncated_capacity = truncated.capacity();
    let truncated_bytes = footprint(&truncated);

    let copied = truncated.copy().ctx_err("copy()")?;
    let sliced = GrowVec::from_slice(truncated.as_slice()).ctx_err("from_slice")?;
    let mut rebuilt = GrowVec::new();
    rebuilt.reserve_exact(truncated.len())
        .and_then(|_| rebuilt.try_extend(truncated.iter().copied()))
        .ctx_err("rebuild")?;
    truncated.shrink_to_fit().ctx_err("shrink_to_fit()")?;

    let mut rows = GrowVec::new();
    for row in [
        compaction_row(Method::Copy, &copied),
        compaction_row(Method::Slice, &sliced),
        compaction_row(Method::Rebuild, &rebuilt),
        compaction_row(Method::ShrinkToFit, &truncated),
    ] {
        rows.push(row)
            .map_err(VecError::from)
            .ctx_err("recording compaction row")?;
    }
    Ok(CompactionReport {
        keep: settings.keep,
        truncated_capacity,
        truncated_bytes,
        rows,
    })
}
