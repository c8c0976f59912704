use stretch_mem::{
    Allocator, GrowVec,
    Overallocate, Doubling, Exact,
    HalfOccupancy, Mirror,
};

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum GrowthChoice {
    #[default]
    Overallocate,
    Doubling,
    Exact,
}

impl GrowthChoice {

    pub fn name(self) -> &'static str {
        match self {
            Self::Overallocate => "overallocate",
            Self::Doubling => "doubling",
            Self::Exact => "exact",
        }
    }

    pub fn apply<T, A: Allocator>(self, vec: &mut GrowVec<T, A>) {
        match self {
            Self::Overallocate => vec.set_growth_policy(Overallocate),
            Self::Doubling => vec.set_growth_policy(Doubling),
            Self::Exact => vec.set_growth_policy(Exact),
        }
    }
}

#[derive(Clone, Copy, Default, Debug)]
pub enum ShrinkChoice {
    #[default]
    Never,
    Half(HalfOccupancy),
    Mirror,
}

impl ShrinkChoice {

    pub fn name(self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Half(_) => "half-occupancy",
            Self::Mirror => "mirror",
        }
    }

    pub fn apply<T, A: Allocator>(self, vec: &mut GrowVec<T, A>) {
        match self {
            Self::Never => vec.clear_shrink_policy(),
            Self::Half(policy) => vec.set_shrink_policy(policy),
            Self::Mirror => vec.set_shrink_policy(Mirror),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProbeSettings {
    pub count: usize,
    pub keep: usize,
    pub points: Vec<usize>,
    pub growth: GrowthChoice,
    pub shrink: ShrinkChoice,
    pub verbosity: u8,
}

impl ProbeSettings {

    pub const DEFAULT_COUNT: usize = 100;
    pub const DEFAULT_KEEP: usize = 10;
    pub const DEFAULT_POINTS: [usize; 10] = [90, 60, 55, 50, 40, 30, 20, 10, 5, 0];

    pub fn new(
        count: usize,
        keep: usize,
        points: Vec<usize>,
        growth: GrowthChoice,
        shrink: ShrinkChoice,
        verbosity: u8,
    ) -> Self
    {
        ProbeSettings {
            count,
            keep,
            points,
            growth,
            shrink,
            verbosity,
        }
    }

    #[inline(always)]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    #[inline(always)]
    pub fn with_keep(mut self, keep: usize) -> Self {
        self.keep = keep;
        self
    }

    #[inline(always)]
    pub fn with_points(mut self, points: Vec<usize>) -> Self {
        self.points = points;
        self
    }

    #[inline(always)]
    pub fn with_growth(mut self, growth: GrowthChoice) -> Self {
        self.growth = growth;
        self
    }

    #[inline(always)]
    pub fn with_shrink(mut self, shrink: ShrinkChoice) -> Self {
        self.shrink = shrink;
        self
    }

    /// Fresh vector carrying the configured policies.
    pub fn vec<T>(&self) -> GrowVec<T> {
        let mut vec = GrowVec::new();
        self.growth.apply(&mut vec);
        self.shrink.apply(&mut vec);
        vec
    }
}

impl Default for ProbeSettings {

    fn default() -> Self {
        Self::new(
            Self::DEFAULT_COUNT,
            Self::DEFAULT_KEEP,
            Self::DEFAULT_POINTS.to_vec(),
            GrowthChoice::default(),
            ShrinkChoice::default(),
            0,
        )
    }
}
