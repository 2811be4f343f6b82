use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Depth cap of the single pass depth-limited search.
pub const DEFAULT_DFS_MAX_DEPTH: u32 = 1000;

/// Largest limit tried by iterative deepening.
pub const DEFAULT_IDS_MAX_DEPTH: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Columns between the target's tail and the exit.
    Gap,
    /// The gap plus every vertical vehicle standing between the target and the exit.
    Blocking,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Bfs,
    Dfs { max_depth: u32 },
    Ids { max_depth: u32 },
    Ucs,
    AStar(Heuristic),
}

impl Method {
    /// Every method in the order they're compared.
    pub fn all() -> [Method; 6] {
        [
            Method::Bfs,
            Method::Dfs {
                max_depth: DEFAULT_DFS_MAX_DEPTH,
            },
            Method::Ids {
                max_depth: DEFAULT_IDS_MAX_DEPTH,
            },
            Method::Ucs,
            Method::AStar(Heuristic::Gap),
            Method::AStar(Heuristic::Blocking),
        ]
    }

    /// Replaces the depth cap of depth-limited methods, other methods are returned unchanged.
    pub fn with_max_depth(self, max_depth: u32) -> Method {
        match self {
            Method::Dfs { .. } => Method::Dfs { max_depth },
            Method::Ids { .. } => Method::Ids { max_depth },
            other => other,
        }
    }

    /// Whether the method minimizes total cost instead of finding any path / the fewest moves.
    pub fn is_cost_aware(self) -> bool {
        match self {
            Method::Ucs | Method::AStar(_) => true,
            Method::Bfs | Method::Dfs { .. } | Method::Ids { .. } => false,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Method::Bfs => "breadth-first search, fewest moves",
            Method::Dfs { .. } => "depth-limited depth-first search, any path",
            Method::Ids { .. } => "iterative deepening, fewest moves",
            Method::Ucs => "uniform-cost search, lowest cost",
            Method::AStar(Heuristic::Gap) => "A* with the gap heuristic, lowest cost",
            Method::AStar(Heuristic::Blocking) => "A* with the blocking heuristic, lowest cost",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::Bfs => write!(f, "bfs"),
            Method::Dfs { .. } => write!(f, "dfs"),
            Method::Ids { .. } => write!(f, "ids"),
            Method::Ucs => write!(f, "ucs"),
            Method::AStar(Heuristic::Blocking) => write!(f, "astar"),
            Method::AStar(Heuristic::Gap) => write!(f, "astar-gap"),
        }
    }
}

impl FromStr for Method {
    type Err = MethodErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Method::Bfs),
            "dfs" => Ok(Method::Dfs {
                max_depth: DEFAULT_DFS_MAX_DEPTH,
            }),
            "ids" => Ok(Method::Ids {
                max_depth: DEFAULT_IDS_MAX_DEPTH,
            }),
            "ucs" => Ok(Method::Ucs),
            "astar" | "a*" => Ok(Method::AStar(Heuristic::Blocking)),
            "astar-gap" | "astar_gap" | "astar-simple" | "astar_simple" => {
                Ok(Method::AStar(Heuristic::Gap))
            }
            _ => Err(MethodErr::Unknown(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodErr {
    Unknown(String),
}

impl Display for MethodErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            MethodErr::Unknown(ref name) => write!(
                f,
                "Unknown method: {} (expected one of bfs, dfs, ids, ucs, astar, astar-gap)",
                name
            ),
        }
    }
}

impl Error for MethodErr {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_methods() {
        for &method in Method::all().iter() {
            assert_eq!(method.to_string().parse::<Method>(), Ok(method));
        }
        assert_eq!("A*".parse(), Ok(Method::AStar(Heuristic::Blocking)));
        assert_eq!("astar_simple".parse(), Ok(Method::AStar(Heuristic::Gap)));
        assert_eq!("BFS".parse(), Ok(Method::Bfs));
        assert_eq!(
            "greedy".parse::<Method>(),
            Err(MethodErr::Unknown("greedy".to_owned()))
        );
        assert_eq!(
            "greedy".parse::<Method>().unwrap_err().to_string(),
            "Unknown method: greedy (expected one of bfs, dfs, ids, ucs, astar, astar-gap)"
        );
    }

    #[test]
    fn depth_caps() {
        assert_eq!(
            "ids".parse::<Method>().unwrap().with_max_depth(5),
            Method::Ids { max_depth: 5 }
        );
        assert_eq!(
            "dfs".parse::<Method>().unwrap(),
            Method::Dfs { max_depth: 1000 }
        );
        assert_eq!(Method::Ucs.with_max_depth(5), Method::Ucs);
        assert!(Method::Ucs.is_cost_aware());
        assert!(!Method::Bfs.is_cost_aware());
    }
}
