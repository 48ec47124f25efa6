mod petstore;
