mod action;
mod bitset;
