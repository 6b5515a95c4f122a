mod point_in_poly;
mod triangulation;
