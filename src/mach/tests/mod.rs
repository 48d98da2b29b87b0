use super::*;


fn body(source: &str) -> Vec<String> {
    translate(source).program.lines().to_vec()
}
