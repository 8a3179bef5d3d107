// rules.rs - The B3/S23 birth and survival rule

/// Next state of a cell given its current state and live neighbor count.
pub fn next_alive(currently_alive: bool, live_neighbors: u8) -> bool {
    match (currently_alive, live_neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3)            => true, // Birth
        _                     => false, // Isolation, overcrowding, or stays dead
    }
}
