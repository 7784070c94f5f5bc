mod generic;
