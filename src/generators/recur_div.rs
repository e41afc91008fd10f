use rand::Rng;

use crate::generators::{carveable_cells, get_carveable_neighbors, midpoint};
use crate::maze::{CellState, Coord, Grid};

/// Per-cell tag used only while dividing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Wall,
    Passage,
    /// Belongs to the region currently being divided.
    Unfilled,
    RedArea,
    GreenArea,
    /// Belongs to a region waiting on the work stack.
    Unused,
}

/// Recursive division by organic region growth.
///
/// The open area is split into a red and a green region grown from two random seeds.
/// Every corridor between the two regions is walled except for one random doorway,
/// then each region is divided again until regions hold a single cell.
pub fn recursive_division<R: Rng + ?Sized>(
    width: u16,
    height: u16,
    rng: &mut R,
) -> Grid<CellState> {
    let tags = divide_all(width, height, rng);

    let mut maze = Grid::new(width, height, CellState::Wall);
    for (coord, tag) in tags.iter() {
        if *tag != Tag::Wall {
            maze[coord] = CellState::Passage;
        }
    }
    maze
}

fn divide_all<R: Rng + ?Sized>(width: u16, height: u16, rng: &mut R) -> Grid<Tag> {
    // Border and (even, even) pillars are permanent walls, everything else is still open
    let mut tags = Grid::new(width, height, Tag::Unfilled);
    for y in 0..height {
        for x in 0..width {
            if tags.is_boundary(x, y) || (x % 2 == 0 && y % 2 == 0) {
                tags[(x, y)] = Tag::Wall;
            }
        }
    }

    // Each frame is a region of carveable cells. Regions waiting on the stack are tagged `Unused`.
    // Pushing red before green means the green side is divided first.
    let mut regions = vec![carveable_cells(width, height).collect::<Vec<_>>()];
    while let Some(region) = regions.pop() {
        region.iter().for_each(|&c| tags[c] = Tag::Unfilled);
        if let Some((red, green)) = divide(&mut tags, &region, rng) {
            regions.push(red);
            regions.push(green);
        }
    }

    // Corridors between cells that were never separated stay open
    for y in 0..height {
        for x in 0..width {
            if tags[(x, y)] != Tag::Wall {
                tags[(x, y)] = Tag::Passage;
            }
        }
    }
    tags
}

/// Split one region in two and wall it off with a single doorway.
///
/// Returns `None` when the region is too small to split, after turning it into passage.
/// Otherwise the two halves are returned, both tagged `Unused`.
fn divide<R: Rng + ?Sized>(
    tags: &mut Grid<Tag>,
    region: &[Coord],
    rng: &mut R,
) -> Option<(Vec<Coord>, Vec<Coord>)> {
    if region.len() < 2 {
        region.iter().for_each(|&c| tags[c] = Tag::Passage);
        return None;
    }

    let red_seed = rng.random_range(0..region.len());
    let mut green_seed = rng.random_range(0..region.len());
    while green_seed == red_seed {
        green_seed = rng.random_range(0..region.len());
    }

    let mut red_queue = vec![region[red_seed]];
    let mut green_queue = vec![region[green_seed]];
    let mut red = Vec::new();
    let mut green = Vec::new();

    // Grow both areas one cell at a time, alternating red and green
    while !red_queue.is_empty() || !green_queue.is_empty() {
        if let Some(cell) = grow_step(tags, &mut red_queue, Tag::RedArea, rng) {
            red.push(cell);
        }
        if let Some(cell) = grow_step(tags, &mut green_queue, Tag::GreenArea, rng) {
            green.push(cell);
        }
    }

    let mut walling_cells = red
        .iter()
        .flat_map(|&r| {
            neighbors_tagged(tags, r, Tag::GreenArea)
                .into_iter()
                .map(move |g| midpoint(r, g))
        })
        .collect::<Vec<_>>();
    if !walling_cells.is_empty() {
        let doorway = walling_cells.swap_remove(rng.random_range(0..walling_cells.len()));
        walling_cells.iter().for_each(|&c| tags[c] = Tag::Wall);
        tags[doorway] = Tag::Passage;
    }

    red.iter()
        .chain(green.iter())
        .for_each(|&c| tags[c] = Tag::Unused);
    Some((red, green))
}

/// Claim one random cell from `queue` for `area`, skipping cells already claimed.
/// Its unfilled neighbors join the queue.
fn grow_step<R: Rng + ?Sized>(
    tags: &mut Grid<Tag>,
    queue: &mut Vec<Coord>,
    area: Tag,
    rng: &mut R,
) -> Option<Coord> {
    while !queue.is_empty() {
        let cell = queue.swap_remove(rng.random_range(0..queue.len()));
        if tags[cell] != Tag::Unfilled {
            continue;
        }
        tags[cell] = area;
        queue.extend(neighbors_tagged(tags, cell, Tag::Unfilled));
        return Some(cell);
    }
    None
}

fn neighbors_tagged(tags: &Grid<Tag>, coord: Coord, tag: Tag) -> Vec<Coord> {
    get_carveable_neighbors(coord, tags.width(), tags.height())
        .into_iter()
        .filter(|&c| tags[c] == tag)
        .collect()
}
