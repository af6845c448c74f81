mod test_gift128_ecb;
