//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// Base year for AoC (first year of Advent of Code)
pub const BASE_YEAR: u16 = 2015;
/// Maximum number of years supported (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Calculate flat index from year/day, returning None if out of bounds
#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    let y = (year - BASE_YEAR) as usize;
    let d = (day - 1) as usize;
    Some(y * DAYS_PER_YEAR + d)
}

/// Reconstruct year/day from flat index
#[inline]
fn from_index(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

// ============================================================================
// Factory Types
// ============================================================================

/// Thread-safe factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
    /// Tags the solver was registered with
    pub tags: &'static [&'static str],
}

struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
    tags: &'static [&'static str],
}

impl SolverFactoryEntry {
    fn info(&self, index: usize) -> FactoryInfo {
        let (year, day) = from_index(index);
        FactoryInfo {
            year,
            day,
            parts: self.parts,
            tags: self.tags,
        }
    }
}

// ============================================================================
// Storage
// ============================================================================

/// Immutable storage for solver factories with O(1) access
///
/// Uses a flat Vec with index math for efficient storage and lookup.
/// Supports years 2015-2034 and days 1-25. Iteration yields entries in
/// ascending (year, day) order.
pub struct SolverFactoryStorage {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverFactoryStorage {
    /// Iterate over metadata for all registered factories
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| entry.as_ref().map(|e| e.info(i)))
    }

    /// Get metadata for a specific factory
    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        let index = calc_index(year, day)?;
        self.entries.get(index)?.as_ref().map(|e| e.info(index))
    }

    /// Check if a factory exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    /// Get the number of registered factories
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if storage is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for constructing a [`SolverRegistry`]
///
/// Registration is fallible: a second solver for the same year-day, or a
/// year-day outside the supported range, is rejected.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverRegistryBuilder};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let registry = SolverRegistryBuilder::new()
///     .register_solver::<Echo>(2024, 1, &["demo"])
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2024, 1, " hello ").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hello");
/// ```
pub struct SolverRegistryBuilder {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverRegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a solver factory with explicit parts count and tags
    ///
    /// Returns error if year/day is out of bounds or already registered.
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        tags: &'static [&'static str],
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        self.entries[index] = Some(SolverFactoryEntry {
            factory: Box::new(factory),
            parts,
            tags,
        });
        Ok(self)
    }

    /// Register a [`Solver`] type directly
    pub fn register_solver<S>(
        self,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register_factory(year, day, S::PARTS, tags, move |input: &str| {
            let instance = SolverInstance::<S>::new(year, day, input)?;
            Ok(Box::new(instance))
        })
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!` and
    /// registers each one with the builder.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_solver::SolverRegistryBuilder;
    ///
    /// // Register only solvers tagged as "grid"
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin> {
            if filter(plugin) {
                self = plugin
                    .solver
                    .register_with(self, plugin.year, plugin.day, plugin.tags)?;
            }
        }
        Ok(self)
    }

    /// Build the immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            storage: SolverFactoryStorage {
                entries: self.entries,
            },
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Immutable registry for looking up and creating solvers
///
/// The registry is `Send + Sync`, so one instance can be shared by every
/// worker of a thread pool.
pub struct SolverRegistry {
    storage: SolverFactoryStorage,
}

impl SolverRegistry {
    /// Get readonly access to the factory storage for iteration/lookup
    pub fn storage(&self) -> &SolverFactoryStorage {
        &self.storage
    }

    /// Create a solver instance by invoking the factory for a specific year/day
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully parsed solver
    /// * `Err(SolverError)` - Invalid year/day, solver not found, or parsing failed
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;

        let entry = self
            .storage
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }
}

// ============================================================================
// Plugins
// ============================================================================

/// Trait for solvers that can register themselves with a registry builder
///
/// Unlike [`Solver`], this trait has no associated types, so different
/// solver types can be stored behind `&'static dyn RegisterableSolver`.
/// Every `Solver + Sync + 'static` gets it through a blanket impl.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific year and day
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<SolverRegistryBuilder, RegistrationError>;

    /// Get the number of parts this solver supports
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(year, day, tags)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Plugin information for automatic solver registration
///
/// Usually submitted by `#[derive(AutoRegisterSolver)]`; a manual submission
/// looks like:
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
///
/// struct Day1Solver;
///
/// impl AocParser for Day1Solver {
///     type SharedData<'a> = ();
///
///     fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// aoc_solver::inventory::submit! {
///     SolverPlugin {
///         year: 2023,
///         day: 1,
///         solver: &Day1Solver,
///         tags: &["2023", "easy"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Optional tags for filtering (e.g., "easy", "grid", "2024")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Macro to register a solver type with a mutable builder binding
///
/// # Example
///
/// ```
/// use aoc_solver::{register_solver, AocParser, ParseError, SolveError, Solver, SolverRegistryBuilder};
///
/// struct MyDay1Solver;
///
/// impl AocParser for MyDay1Solver {
///     type SharedData<'a> = ();
///
///     fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for MyDay1Solver {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut Self::SharedData<'_>, _: u8) -> Result<String, SolveError> {
///         Ok("done".to_string())
///     }
/// }
///
/// let mut builder = SolverRegistryBuilder::new();
/// register_solver!(builder, MyDay1Solver, 2023, 1);
/// let registry = builder.build();
/// assert!(registry.storage().contains(2023, 1));
/// ```
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $year:expr, $day:expr) => {
        $builder = $builder
            .register_solver::<$solver>($year, $day, &[])
            .expect("Failed to register solver");
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AocParser, SolveError};

    struct LineCount;

    impl AocParser for LineCount {
        type SharedData<'a> = Vec<&'a str>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::MissingData("empty input".into()));
            }
            Ok(input.lines().collect())
        }
    }

    impl Solver for LineCount {
        const PARTS: u8 = 1;

        fn solve_part(shared: &mut Self::SharedData<'_>, _: u8) -> Result<String, SolveError> {
            Ok(shared.len().to_string())
        }
    }

    #[test]
    fn test_index_roundtrip() {
        for index in [0, 24, 25, CAPACITY - 1] {
            let (year, day) = from_index(index);
            assert_eq!(calc_index(year, day), Some(index));
        }
        assert_eq!(calc_index(2014, 1), None);
        assert_eq!(calc_index(2035, 1), None);
        assert_eq!(calc_index(2024, 0), None);
        assert_eq!(calc_index(2024, 26), None);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let result = SolverRegistryBuilder::new()
            .register_solver::<LineCount>(2024, 3, &[])
            .unwrap()
            .register_solver::<LineCount>(2024, 3, &[]);
        assert!(matches!(
            result,
            Err(RegistrationError::DuplicateSolver(2024, 3))
        ));
    }

    #[test]
    fn test_out_of_range_registration_rejected() {
        let result = SolverRegistryBuilder::new().register_solver::<LineCount>(2040, 1, &[]);
        assert!(matches!(
            result,
            Err(RegistrationError::InvalidYearDay(2040, 1))
        ));
    }

    #[test]
    fn test_storage_iterates_in_order() {
        let registry = SolverRegistryBuilder::new()
            .register_solver::<LineCount>(2024, 9, &["b"])
            .unwrap()
            .register_solver::<LineCount>(2016, 2, &["a"])
            .unwrap()
            .build();

        let infos: Vec<_> = registry.storage().iter_info().collect();
        assert_eq!(infos.len(), 2);
        assert_eq!((infos[0].year, infos[0].day, infos[0].tags), (2016, 2, &["a"][..]));
        assert_eq!((infos[1].year, infos[1].day, infos[1].parts), (2024, 9, 1));
        assert_eq!(registry.storage().len(), 2);
        assert!(!registry.storage().is_empty());
    }

    #[test]
    fn test_create_solver_errors() {
        let registry = SolverRegistryBuilder::new()
            .register_solver::<LineCount>(2024, 1, &[])
            .unwrap()
            .build();

        assert!(matches!(
            registry.create_solver(2024, 2, "x"),
            Err(SolverError::NotFound(2024, 2))
        ));
        assert!(matches!(
            registry.create_solver(1999, 1, "x"),
            Err(SolverError::InvalidYearDay(1999, 1))
        ));
        assert!(matches!(
            registry.create_solver(2024, 1, ""),
            Err(SolverError::ParseError(ParseError::MissingData(_)))
        ));

        let mut solver = registry.create_solver(2024, 1, "a\nb\nc").unwrap();
        assert_eq!(solver.solve(1).unwrap().answer, "3");
    }
}
