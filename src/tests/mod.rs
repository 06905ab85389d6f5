mod eval;
mod roll;
