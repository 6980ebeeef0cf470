mod quad_tree;
