use aoc25_day_4::*;

fn main() {
    divan::main();
}

const INPUT: &str = "..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.";

#[divan::bench]
fn bench_part1() {
    part1::process(divan::black_box(INPUT)).unwrap();
}

#[divan::bench]
fn bench_part2() {
    part2::process(divan::black_box(INPUT)).unwrap();
}
