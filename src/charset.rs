const LOWEST: u8 = 32;
const HIGHEST: u8 = 126;

pub fn is_allowed(b: u8) -> bool {
    (LOWEST..=HIGHEST).contains(&b)
}

pub fn allowed_alphabet() -> Vec<u8> {
    (LOWEST..=HIGHEST).collect()
}
