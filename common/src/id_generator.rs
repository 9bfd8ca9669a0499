use rand::Rng;

use crate::GameId;

/// Random 128-bit id rendered in the familiar 8-4-4-4-12 layout with the
/// version-4 and variant bits set.
pub fn generate_game_id() -> GameId {
    let mut rng = rand::rng();
    let mut bytes: [u8; 16] = rng.random();
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    GameId::new(format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_game_id_layout() {
        let id = generate_game_id();
        let text = id.to_string();
        let parts: Vec<&str> = text.split('-').collect();
        let lengths: Vec<usize> = parts.iter().map(|p| p.len()).collect();
        assert_eq!(lengths, vec![8, 4, 4, 4, 12]);
        assert!(parts[2].starts_with('4'));
    }

    #[test]
    fn test_game_ids_are_unique() {
        let ids: HashSet<_> = (0..100).map(|_| generate_game_id()).collect();
        assert_eq!(ids.len(), 100);
    }
}
