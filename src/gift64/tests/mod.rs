mod test_gift64_ecb;
